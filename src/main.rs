//! Wordle Belief - CLI
//!
//! Simulate games, tutor a live game, or inspect words with any of the
//! frequency, entropy, Bayesian or A* policies.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use wordle_belief::{
    candidates::CandidateStore,
    commands::{
        TargetSelection, inspect_word, rank_openers, run_simulations, run_tutor, solve_target,
    },
    core::Word,
    output::{print_inspect_result, print_openers, print_simulation_stats, print_solve_result},
    solver::{DEFAULT_MAX_GUESSES, Session, SessionConfig, StrategyKind},
    wordlists::loader::load_from_file,
};

/// Openers ranked when none are named
const DEFAULT_OPENER_COUNT: usize = 20;

#[derive(Parser)]
#[command(
    name = "wordle_belief",
    about = "Wordle solver with frequency, entropy, Bayesian and A* policies over a shared belief state",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: frequency (default), entropy, bayesian, astar
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: StrategyKind,

    /// Newline-delimited answer list
    #[arg(short, long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Newline-delimited list of extra legal guesses
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Disable intersecting probe words
    #[arg(long, global = true)]
    no_intersecting: bool,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Fixed first guess
    #[arg(short = 'f', long, global = true)]
    starting_word: Option<String>,

    /// Show per-turn detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Play every (or a subset of) answer and report statistics
    Simulate {
        /// Only the first N answers by score
        #[arg(short = 'n', long, conflicts_with = "sample")]
        count: Option<usize>,

        /// A random sample of N answers
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Recommend guesses for a game played elsewhere
    Tutor,

    /// Score a word and measure how it splits the answers
    Inspect {
        /// Word to inspect
        word: String,
    },

    /// Rank opening words by the share of answers they leave
    Openers {
        /// Words to rank; defaults to the top-scoring legal guesses
        words: Vec<String>,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default()
            .with_strategy(self.strategy)
            .with_intersecting(!self.no_intersecting)
            .with_max_guesses(self.max_guesses);
        if let Some(word) = &self.starting_word {
            config = config.with_starting_word(word.clone());
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = load_store(&cli.answers, cli.guesses.as_deref())?;

    if cli.verbose {
        println!(
            "{} {} answers, {} legal guesses",
            "Loaded".bright_black(),
            store.answer_count(),
            store.guess_count()
        );
    }

    match &cli.command {
        Commands::Solve { word } => run_solve_command(&cli, &store, word),
        Commands::Simulate {
            count,
            sample,
            seed,
            quiet,
        } => {
            let selection = match (count, sample) {
                (_, Some(n)) => TargetSelection::Sample {
                    count: *n,
                    seed: *seed,
                },
                (Some(n), None) => TargetSelection::First(*n),
                (None, None) => TargetSelection::All,
            };
            run_simulate_command(&cli, &store, selection, !quiet)
        }
        Commands::Tutor => run_tutor_command(&cli, &store),
        Commands::Inspect { word } => {
            let result = inspect_word(&store, word)
                .with_context(|| format!("cannot inspect '{word}'"))?;
            print_inspect_result(&result);
            Ok(())
        }
        Commands::Openers { words } => run_openers_command(&store, words),
    }
}

/// Read and score the corpus
fn load_store(answers: &Path, guesses: Option<&Path>) -> Result<CandidateStore> {
    let answer_words = load_from_file(answers)
        .with_context(|| format!("failed to load answers from {}", answers.display()))?;
    if answer_words.is_empty() {
        bail!("{} contains no words", answers.display());
    }

    let guess_words = match guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load guesses from {}", path.display()))?,
        None => Vec::new(),
    };

    // Intersecting is a per-session setting; the store default is overridden
    Ok(CandidateStore::new(&answer_words, &guess_words, true))
}

fn run_solve_command(cli: &Cli, store: &CandidateStore, word: &str) -> Result<()> {
    let config = cli.session_config().with_target(word);
    let result = solve_target(store, config).with_context(|| format!("cannot solve '{word}'"))?;

    print_solve_result(&result, cli.verbose);
    Ok(())
}

fn run_simulate_command(
    cli: &Cli,
    store: &CandidateStore,
    selection: TargetSelection,
    show_progress: bool,
) -> Result<()> {
    let targets = selection.select(store.answers());

    println!("\n{}", "═".repeat(60));
    println!(" Simulating {} games ", targets.len());
    println!("{}", "═".repeat(60));
    println!("Strategy: {}", cli.strategy);
    if let Some(word) = &cli.starting_word {
        println!("Starting word: {}", word.to_uppercase());
    }
    println!();

    let stats = run_simulations(store, &targets, &cli.session_config(), show_progress)
        .context("simulation failed")?;
    print_simulation_stats(&stats, cli.verbose);
    Ok(())
}

fn run_tutor_command(cli: &Cli, store: &CandidateStore) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Belief - Tutor Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut session =
        Session::new(store, cli.session_config()).context("cannot start a tutor session")?;
    let stdin = io::stdin();
    run_tutor(&mut session, stdin.lock(), io::stdout()).context("tutor session failed")?;
    Ok(())
}

fn run_openers_command(store: &CandidateStore, words: &[String]) -> Result<()> {
    let openers: Vec<Word> = if words.is_empty() {
        store
            .guesses()
            .iter()
            .take(DEFAULT_OPENER_COUNT)
            .map(|c| c.word.clone())
            .collect()
    } else {
        words
            .iter()
            .map(|w| Word::new(w).with_context(|| format!("invalid opener '{w}'")))
            .collect::<Result<_>>()?
    };

    let ranked = rank_openers(store, &openers);
    print_openers(&ranked);
    Ok(())
}

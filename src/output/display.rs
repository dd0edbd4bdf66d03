//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, share_bar};
use crate::commands::{InspectResult, OpenerStats, SimulationStats, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.target.text().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        let marker = if turn.was_candidate { "" } else { "  (probe)" };
        println!(
            "\nTurn {}: {} {}{}",
            i + 1,
            colored_guess(&turn.word, turn.pattern),
            turn.pattern.to_emoji(),
            marker.bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );

            if let Some(entropy) = turn.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = turn.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if turn.candidates_after > 0 {
                    let ratio = turn.candidates_before as f64 / turn.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    if verbose {
        println!("\n  Constraints: {}", result.final_constraints.bright_black());
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guess_count())
                .red()
                .bold()
        );
    }
}

/// Print aggregate statistics from a batch run
pub fn print_simulation_stats(stats: &SimulationStats, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", stats.strategy);
    if let Some(word) = &stats.starting_word {
        println!("   Starting word:    {}", word.to_uppercase());
    }
    println!("   Games played:     {}", stats.total());
    println!(
        "   Solved:           {} ({:.2}%)",
        stats.solved.to_string().green(),
        stats.success_rate() * 100.0
    );
    if stats.failed > 0 {
        println!("   Failed:           {}", stats.failed.to_string().red());
    }
    match stats.average_guesses {
        Some(avg) => println!(
            "   Average guesses:  {}",
            format!("{avg:.3}").bright_yellow().bold()
        ),
        None => println!("   Average guesses:  -"),
    }
    let secs = stats.duration.as_secs_f64();
    println!("   Time taken:       {secs:.2}s");
    if secs > 0.0 {
        println!("   Games/second:     {:.1}", stats.total() as f64 / secs);
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = stats.total();
    for guesses in 1..=stats.max_guesses {
        let count = stats.distribution.get(&guesses).copied().unwrap_or(0);
        println!("   {guesses:>4}: {} {count:5}", share_bar(count, total, 40).green());
    }
    println!(
        "   fail: {} {:5}",
        share_bar(stats.failed, total, 40).red(),
        stats.failed
    );

    if verbose && !stats.hardest.is_empty() {
        println!("\n🔥 {}", "Hardest targets:".bright_cyan().bold());
        for (word, guesses, solved) in &stats.hardest {
            let status = if *solved {
                format!("{guesses} guesses").yellow()
            } else {
                "failed".red()
            };
            println!("   {}  {status}", word.text());
        }
    }
}

/// Print the result of word inspection
pub fn print_inspect_result(result: &InspectResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD INSPECTION:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Positional score: {}", result.score);
    println!("   Presence score:   {}", result.presence_score);
    match result.guess_rank {
        Some((rank, of)) => println!("   Guess rank:       {rank} of {of}"),
        None => println!("   Guess rank:       {}", "not a listed guess".bright_black()),
    }
    println!(
        "   Possible answer:  {}",
        if result.is_answer { "yes".green() } else { "no".red() }
    );

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);
    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction());
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} distinct patterns)",
        result.metrics.max_partition, result.metrics.partitions
    );
}

/// Print opening words best first
pub fn print_openers(ranked: &[OpenerStats]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, stats) in ranked.iter().enumerate() {
        let extremes = match (&stats.best, &stats.worst) {
            (Some((best, b)), Some((worst, w))) => {
                format!("best {} ({b}), worst {} ({w})", best.text(), worst.text())
            }
            _ => String::new(),
        };
        println!(
            "   {:>3}. {}  {}  {}",
            i + 1,
            stats.word.text().bold(),
            format!("{:6.2}%", stats.average_remaining * 100.0).bright_yellow(),
            extremes.bright_black()
        );
    }
}

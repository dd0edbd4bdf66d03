//! Interactive tutor mode
//!
//! Recommends a guess, then asks what was actually played and what the game
//! reported back: whether it was solved, the green letters in place and the
//! yellow letters. Reads from any `BufRead` so it can be scripted.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{ExternalFeedback, Session, SessionOutcome, SessionState};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates listed after each turn
const SAMPLE_SIZE: usize = 10;

/// Drive `session` from line-oriented input until it ends.
///
/// Stops on a solve, when guesses or words run out, at end of input, or when
/// `quit` is entered as the played word. Feedback the session rejects is
/// reported and the same turn is asked again.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_tutor<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
) -> io::Result<SessionOutcome> {
    writeln!(out, "Enter the word you played, or press ENTER to play the suggestion.")?;
    writeln!(out, "Green letters are typed in place with _ for the rest, e.g. __a_e.")?;
    writeln!(out, "Type 'quit' as the played word to stop.\n")?;

    session.start();

    while session.state() == SessionState::Guessing {
        let Some(recommendation) = session.current_recommendation().cloned() else {
            break;
        };
        let turn = session.guess_history().len() + 1;
        let remaining = session.remaining_candidate_count();

        writeln!(
            out,
            "Turn {turn}/{}: {remaining} candidates remaining",
            session.max_guesses()
        )?;
        write!(out, "Suggested guess: {}", recommendation.text().bold())?;
        if remaining > 1 {
            let candidates: Vec<&Word> = session.candidates().iter().map(|c| &c.word).collect();
            let metrics = calculate_metrics(&recommendation, &candidates);
            write!(
                out,
                "  ({:.3} bits, ~{:.1} left)",
                metrics.entropy, metrics.expected_remaining
            )?;
        }
        writeln!(out)?;

        let Some(played) = prompt(&mut input, &mut out, "Word played")? else {
            break;
        };
        if played.eq_ignore_ascii_case("quit") {
            break;
        }
        let played = if played.is_empty() {
            recommendation.text().to_string()
        } else {
            played
        };

        let Some(solved) = prompt(&mut input, &mut out, "Solved? [y/n]")? else {
            break;
        };

        let feedback = if solved.eq_ignore_ascii_case("y") || solved.eq_ignore_ascii_case("yes")
        {
            ExternalFeedback::solved(played)
        } else {
            let Some(green) = prompt(&mut input, &mut out, "Green letters")? else {
                break;
            };
            let Some(yellow) = prompt(&mut input, &mut out, "Yellow letters")? else {
                break;
            };
            let green = if green.is_empty() {
                "_____".to_string()
            } else {
                green
            };
            let yellow = (!yellow.is_empty()).then_some(yellow.as_str());
            ExternalFeedback::new(played, green, yellow)
        };

        if let Err(e) = session.apply_external_feedback(&feedback) {
            writeln!(out, "{} {e}\n", "✗".red())?;
            continue;
        }

        if let Some(pattern) = session.patterns().last() {
            writeln!(out, "{}", pattern.to_emoji())?;
        }
        if session.state() != SessionState::Solved {
            report_candidates(session, &mut out)?;
        }
    }

    let outcome = session.outcome();
    match session.state() {
        SessionState::Solved => writeln!(
            out,
            "{} Solved in {} guesses",
            "✓".green().bold(),
            outcome.guess_count()
        )?,
        SessionState::Exhausted => writeln!(
            out,
            "{} Out of guesses after {} turns",
            "✗".red().bold(),
            outcome.guess_count()
        )?,
        SessionState::Init | SessionState::Guessing => writeln!(out, "Session ended")?,
    }

    Ok(outcome)
}

fn report_candidates<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let candidates = session.candidates();
    writeln!(out, "{} candidates remain", candidates.len())?;
    if !candidates.is_empty() {
        let sample: Vec<&str> = candidates
            .iter()
            .take(SAMPLE_SIZE)
            .map(|c| c.word.text())
            .collect();
        writeln!(out, "  {}", sample.join(" "))?;
    }
    writeln!(out)
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::sample_store;
    use std::io::Cursor;

    fn session(starting_word: &str) -> Session {
        let config = SessionConfig::default().with_starting_word(starting_word);
        Session::new(&sample_store(), config).unwrap()
    }

    fn run(session: &mut Session, script: &str) -> (SessionOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_tutor(session, Cursor::new(script), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_suggestion_then_solves() {
        let mut session = session("slate");
        // SLATE against CRANE, then report CRANE as the answer
        let (outcome, text) = run(&mut session, "\nn\n__a_e\n\ncrane\ny\n");

        assert!(outcome.solved);
        let guesses: Vec<&str> = outcome.guesses.iter().map(Word::text).collect();
        assert_eq!(guesses, ["SLATE", "CRANE"]);
        assert!(text.contains("SLATE"));
        assert!(text.contains("Turn 2/6"));
        assert!(text.contains("candidates remain"));
        assert!(text.contains("Solved in 2 guesses"));
    }

    #[test]
    fn rejected_feedback_repeats_the_turn() {
        let mut session = session("slate");
        // Green Z cannot sit where SLATE has an L, so the turn is asked again
        let (outcome, text) = run(&mut session, "\nn\n_z___\n\n\nn\n__a_e\n\n");

        assert_eq!(outcome.guess_count(), 1);
        assert!(text.contains("inconsistent feedback"));
        assert_eq!(session.state(), SessionState::Guessing);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let mut session = session("slate");
        let (outcome, text) = run(&mut session, "");

        assert!(outcome.guesses.is_empty());
        assert!(text.contains("Session ended"));
    }

    #[test]
    fn quit_stops_before_playing() {
        let mut session = session("slate");
        let (outcome, _) = run(&mut session, "quit\n");

        assert!(outcome.guesses.is_empty());
        assert!(!outcome.solved);
    }

    #[test]
    fn runs_out_of_guesses() {
        let config = SessionConfig::default()
            .with_starting_word("fuzzy")
            .with_max_guesses(1);
        let mut session = Session::new(&sample_store(), config).unwrap();
        let (outcome, text) = run(&mut session, "\nn\n_____\n\n");

        assert_eq!(outcome.guess_count(), 1);
        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(text.contains("Out of guesses"));
    }

    #[test]
    fn blank_green_means_nothing_in_place() {
        let mut session = session("slate");
        // No greens, yellow S
        run(&mut session, "\nn\n\ns\nquit\n");

        assert_eq!(session.patterns()[0].to_string(), "Y----");
        assert!(session.candidates().iter().all(|c| c.word.has_letter(b'S')));
    }
}

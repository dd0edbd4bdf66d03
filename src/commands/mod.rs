//! Command implementations

pub mod inspect;
pub mod openers;
pub mod simulate;
pub mod solve;
pub mod tutor;

pub use inspect::{InspectResult, inspect_word};
pub use openers::{OpenerStats, rank_openers};
pub use simulate::{GameResult, SimulationStats, TargetSelection, run_simulations};
pub use solve::{SolveResult, TurnRecord, solve_target};
pub use tutor::run_tutor;

use indicatif::{ProgressBar, ProgressStyle};

/// Bar for batch commands; hidden when `visible` is false
pub(crate) fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

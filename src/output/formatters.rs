//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Render `word` with each letter on its feedback colour
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.marks())
        .map(|(&letter, mark)| {
            let cell = format!(" {} ", letter as char);
            match mark {
                Feedback::Green => cell.black().on_green().bold().to_string(),
                Feedback::Yellow => cell.black().on_yellow().bold().to_string(),
                Feedback::Gray => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most a pool of `pool_size` could yield
#[must_use]
pub fn entropy_bar(entropy: f64, pool_size: usize, width: usize) -> String {
    let max_entropy = (pool_size.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Share of `total` as a bar plus percentage
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    let pct = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    format!("{} {pct:5.1}%", create_progress_bar(pct, 100.0, width))
}

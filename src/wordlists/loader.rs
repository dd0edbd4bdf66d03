//! Word list loading utilities
//!
//! Corpora are newline-delimited, case-insensitive 5-letter tokens. Blank
//! lines and lines starting with `#` are ignored.

use crate::core::Word;
use crate::error::SolverError;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a word list, failing on the first malformed entry
///
/// # Errors
///
/// Returns the line number (1-based) and the word error for the first entry
/// that is not a 5-letter alphabetic word.
///
/// # Examples
/// ```
/// use wordle_belief::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\n# openers\nSlate\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
///
/// assert!(parse_words("crane\ncranes\n").is_err());
/// ```
pub fn parse_words(text: &str) -> Result<Vec<Word>, (usize, SolverError)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| Word::new(line).map_err(|e| (number, e)))
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an `InvalidData`
/// error naming the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_belief::wordlists::loader::load_from_file;
///
/// let words = load_from_file("answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    parse_words(&content).map_err(|(line, e)| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}:{line}: {e}", path.display()),
        )
    })
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_belief::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

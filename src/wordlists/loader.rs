//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.
//! Every non-blank line must be a valid word; the first bad line aborts the load.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while loading or validating a vocabulary
#[derive(Debug)]
pub enum VocabularyError {
    /// The word list file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A line is not a valid 5-letter word
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
    /// A word list has no words
    Empty(&'static str),
    /// A word appears more than once in the same list
    Duplicate(Word),
    /// An answer is missing from the guess list
    AnswerNotGuessable(Word),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::InvalidWord { line, text, source } => {
                write!(f, "line {line}: '{text}' is not a valid word ({source})")
            }
            Self::Empty(list) => write!(f, "the {list} list is empty"),
            Self::Duplicate(word) => write!(f, "'{word}' appears more than once"),
            Self::AnswerNotGuessable(word) => {
                write!(f, "answer '{word}' is not in the guess list")
            }
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Empty(_) | Self::Duplicate(_) | Self::AnswerNotGuessable(_) => None,
        }
    }
}

/// Load words from a file, one per line
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read and
/// `VocabularyError::InvalidWord` for the first line that is not a word.
///
/// # Examples
/// ```no_run
/// use wordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(content.lines())?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to words
///
/// # Errors
///
/// Returns `VocabularyError::InvalidWord` for the first entry that is not a word.
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::loader::words_from_slice;
/// use wordle_solver::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS).unwrap();
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, VocabularyError> {
    parse_lines(slice.iter().copied())
}

fn parse_lines<'s>(lines: impl Iterator<Item = &'s str>) -> Result<Vec<Word>, VocabularyError> {
    let mut words = Vec::new();

    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| VocabularyError::InvalidWord {
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

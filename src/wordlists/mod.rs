//! Word lists for Wordle solving
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus the `Vocabulary` pair the solver and commands consume.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
pub use loader::VocabularyError;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The guess list and the answer list, validated together
///
/// Every answer is also a valid guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    guesses: Vec<Word>,
    answers: Vec<Word>,
}

impl Vocabulary {
    /// Pair a guess list with an answer list
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if either list is empty,
    /// `VocabularyError::Duplicate` if a word repeats within a list and
    /// `VocabularyError::AnswerNotGuessable` for the first answer missing
    /// from the guess list.
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, VocabularyError> {
        if guesses.is_empty() {
            return Err(VocabularyError::Empty("guess"));
        }
        if answers.is_empty() {
            return Err(VocabularyError::Empty("answer"));
        }

        let guessable = unique_words(&guesses)?;
        unique_words(&answers)?;
        if let Some(missing) = answers.iter().find(|answer| !guessable.contains(answer)) {
            return Err(VocabularyError::AnswerNotGuessable(*missing));
        }

        Ok(Self { guesses, answers })
    }

    /// The lists compiled into the binary
    ///
    /// # Panics
    /// Never in practice: the build script validates both lists.
    #[must_use]
    pub fn embedded() -> Self {
        let guesses = loader::words_from_slice(GUESSES).expect("embedded guesses are validated");
        let answers = loader::words_from_slice(ANSWERS).expect("embedded answers are validated");
        Self::new(guesses, answers).expect("embedded answers are a subset of guesses")
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn is_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answers.contains(word)
    }
}

fn unique_words(words: &[Word]) -> Result<FxHashSet<&Word>, VocabularyError> {
    let mut seen = FxHashSet::default();
    for word in words {
        if !seen.insert(word) {
            return Err(VocabularyError::Duplicate(*word));
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn counts_match_consts() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 811);
        assert_eq!(GUESSES_COUNT, 1356);
    }

    #[test]
    fn embedded_vocabulary_is_consistent() {
        let vocabulary = Vocabulary::embedded();
        let opening = Word::new("aloes").unwrap();

        assert_eq!(vocabulary.answers().len(), ANSWERS_COUNT);
        assert_eq!(vocabulary.guesses().len(), GUESSES_COUNT);
        assert!(vocabulary.is_guess(&opening));
        assert!(!vocabulary.is_answer(&opening));
        assert!(vocabulary.answers().iter().all(|a| vocabulary.is_guess(a)));
    }

    #[test]
    fn embedded_lists_have_no_duplicates() {
        let vocabulary = Vocabulary::embedded();
        let unique: FxHashSet<&Word> = vocabulary.guesses().iter().collect();
        assert_eq!(unique.len(), vocabulary.guesses().len());
    }

    #[test]
    fn rejects_answer_outside_guesses() {
        let result = Vocabulary::new(words(&["crane", "slate"]), words(&["crane", "irate"]));
        assert!(matches!(
            result,
            Err(VocabularyError::AnswerNotGuessable(w)) if w.text() == "irate"
        ));
    }

    #[test]
    fn rejects_repeated_words() {
        let result = Vocabulary::new(
            words(&["crate", "grate"]),
            words(&["crate", "grate", "crate"]),
        );
        assert!(matches!(
            result,
            Err(VocabularyError::Duplicate(w)) if w.text() == "crate"
        ));

        let result = Vocabulary::new(words(&["slate", "crate", "slate"]), words(&["crate"]));
        assert!(matches!(
            result,
            Err(VocabularyError::Duplicate(w)) if w.text() == "slate"
        ));
    }

    #[test]
    fn rejects_empty_lists() {
        assert!(matches!(
            Vocabulary::new(Vec::new(), words(&["crane"])),
            Err(VocabularyError::Empty("guess"))
        ));
        assert!(matches!(
            Vocabulary::new(words(&["crane"]), Vec::new()),
            Err(VocabularyError::Empty("answer"))
        ));
    }
}

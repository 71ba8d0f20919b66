//! Candidate filtering
//!
//! The candidate set is the ordered subset of a word list consistent with a
//! `ConstraintState`. It is always rebuilt from the previous set, never edited
//! in place.

use super::constraint::ConstraintState;
use super::word::Word;

/// Keep the words consistent with `state`, preserving their order
///
/// # Examples
/// ```
/// use wordle_solver::core::{ConstraintState, Word, filter};
///
/// let words: Vec<Word> = ["taper", "paper", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let answer = Word::new("taper").unwrap();
/// let state = ConstraintState::compute_delta(&answer, &Word::new("aloes").unwrap());
///
/// let remaining = filter(&words, &state);
/// assert_eq!(remaining, &words[..2]);
/// ```
#[must_use]
pub fn filter(words: &[Word], state: &ConstraintState) -> Vec<Word> {
    words
        .iter()
        .filter(|word| state.is_consistent_with(word))
        .copied()
        .collect()
}

/// Count the words consistent with `state` without allocating
#[must_use]
pub fn count_consistent(words: &[Word], state: &ConstraintState) -> usize {
    words
        .iter()
        .filter(|word| state.is_consistent_with(word))
        .count()
}

//! Entropy-heuristic guess selection
//!
//! Picks the guess whose distinct letters carry the most candidate weight.

use super::calculator::LetterWeights;
use crate::core::{ConstraintState, Word};
use rayon::prelude::*;

/// Select best guess by maximizing the letter-weight score
///
/// Returns the highest-scoring word and its score, or `None` if the guess
/// pool is empty. Ties go to the word appearing first in `guess_pool`.
///
/// # Panics
/// Panics if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_solver::core::{ConstraintState, Word};
/// use wordle_solver::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("crate").unwrap(),
///     Word::new("grate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let state = ConstraintState::new();
/// let (best, score) = select_best_guess(&guess_refs, &candidates, &state).unwrap();
/// assert_eq!(best.text(), "crate");
/// assert!(score > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[Word],
    state: &ConstraintState,
) -> Option<(&'a Word, f64)> {
    let weights = LetterWeights::new(candidates, state);

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, guess, weights.score(guess)))
        .max_by(|(i1, _, s1), (i2, _, s2)| s1.total_cmp(s2).then(i2.cmp(i1)))
        .map(|(_, guess, score)| {
            log::trace!("entropy heuristic picked {guess} (score {score:.4})");
            (guess, score)
        })
}

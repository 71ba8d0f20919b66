//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::{ConstraintState, Word};
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the word with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties go to the word appearing first in
/// `guess_pool`. Cost is `O(|guess_pool| × |candidates|²)`; guesses are scored
/// in parallel.
///
/// # Examples
/// ```
/// use wordle_solver::core::{ConstraintState, Word};
/// use wordle_solver::solver::minimax::select_best_guess;
///
/// let guesses: Vec<Word> = ["slate", "crate", "magic", "logic"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<Word> = ["crate", "grate", "irate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let (best, max_remaining) =
///     select_best_guess(&guess_refs, &candidates, &ConstraintState::new()).unwrap();
/// assert_eq!(best.text(), "magic");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[Word],
    state: &ConstraintState,
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates, state);
            (max_remaining, index, guess)
        })
        .min_by_key(|&(max_remaining, index, _)| (max_remaining, index))
        .map(|(max_remaining, _, guess)| {
            log::trace!("minimax picked {guess} (worst case {max_remaining})");
            (guess, max_remaining)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_worst_case() {
        // Worst cases against {crate, grate, irate}: slate 3, crate 2, magic 1, logic 1
        let guesses = words(&["slate", "crate", "magic", "logic"]);
        let candidates = words(&["crate", "grate", "irate"]);
        let guess_refs: Vec<&Word> = guesses.iter().collect();

        let (best, max_remaining) =
            select_best_guess(&guess_refs, &candidates, &ConstraintState::new()).unwrap();

        assert_eq!(best.text(), "magic");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn four_word_vocabulary_tie_goes_to_first() {
        // Every word leaves at most 2 of the 4 candidates:
        //   crane -> [1, 1, 2, 2], crate -> [1, 1, 2, 2]
        //   grate -> [1, 2, 1, 2], irate -> [1, 2, 2, 1]
        let vocabulary = words(&["crane", "crate", "grate", "irate"]);
        let guess_refs: Vec<&Word> = vocabulary.iter().collect();

        let (best, max_remaining) =
            select_best_guess(&guess_refs, &vocabulary, &ConstraintState::new()).unwrap();
        assert_eq!(best.text(), "crane");
        assert_eq!(max_remaining, 2);

        let reversed: Vec<&Word> = vocabulary.iter().rev().collect();
        let (best, _) =
            select_best_guess(&reversed, &vocabulary, &ConstraintState::new()).unwrap();
        assert_eq!(best.text(), "irate");
    }

    #[test]
    fn uses_accumulated_state() {
        let candidates = words(&["crate", "grate", "irate"]);
        let answer = Word::new("grate").unwrap();
        let state = ConstraintState::compute_delta(&answer, &Word::new("slate").unwrap());

        let guesses = words(&["slate", "grate", "cigar"]);
        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let (best, max_remaining) = select_best_guess(&guess_refs, &candidates, &state).unwrap();

        assert_eq!(best.text(), "cigar");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates, &ConstraintState::new()).is_none());
    }
}

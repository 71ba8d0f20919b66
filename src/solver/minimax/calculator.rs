//! Worst-case remaining candidates for a guess
//!
//! Simulates every candidate as the answer, merges the resulting clue into the
//! current state and counts the survivors.

use crate::core::{ClueVector, ConstraintState, Word, count_consistent};

/// Calculate the maximum remaining candidates for a guess
///
/// For each candidate answer `a`, the guess's constraints against `a` are
/// merged into `state` and the consistent candidates counted; the largest
/// count is the guess's worst case. Answers yielding the same clue vector
/// yield the same constraints, so each distinct clue vector is counted once.
///
/// # Examples
/// ```
/// use wordle_solver::core::{ConstraintState, Word};
/// use wordle_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("magic").unwrap();
/// let candidates: Vec<Word> = ["crate", "grate", "irate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates, &ConstraintState::new());
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(
    guess: &Word,
    candidates: &[Word],
    state: &ConstraintState,
) -> usize {
    let mut seen = [false; ClueVector::COUNT];
    let mut worst = 0;

    for answer in candidates {
        let clues = ClueVector::compute(answer, guess);
        let code = usize::from(clues.code());
        if seen[code] {
            continue;
        }
        seen[code] = true;

        let simulated = state.combine(&ConstraintState::from_clues(guess, &clues));
        worst = worst.max(count_consistent(candidates, &simulated));
    }

    worst
}

//! Letter weight table for the entropy heuristic
//!
//! Approximates how much a guess would reveal by crediting each letter with
//! how often it appears among the remaining candidates, per position.

use crate::core::{ConstraintState, WORD_LENGTH, Word};

/// Credit given to every position for a letter seen at some other position
const CROSS_POSITION_CREDIT: f64 = 0.25;

/// Per-position, per-letter weights built from a candidate set
#[derive(Debug, Clone, PartialEq)]
pub struct LetterWeights {
    table: [[f64; 26]; WORD_LENGTH],
}

impl LetterWeights {
    /// Build the weight table for `candidates` under `state`
    ///
    /// For each candidate and each position not already matched, the
    /// candidate's letter gains `1/n` at that position and `0.25/n` at every
    /// position. Letters already green or known misplaced at a position are
    /// then zeroed there, since guessing them reveals nothing new.
    ///
    /// # Panics
    /// Panics if `candidates` is empty: a candidate set always contains the answer.
    #[must_use]
    pub fn new(candidates: &[Word], state: &ConstraintState) -> Self {
        assert!(
            !candidates.is_empty(),
            "letter weights need at least one candidate"
        );

        let delta = 1.0 / candidates.len() as f64;
        let mut table = [[0.0; 26]; WORD_LENGTH];

        for candidate in candidates {
            for (i, &letter) in candidate.letters().iter().enumerate() {
                if state.matched(i).is_some() {
                    continue;
                }
                let index = letter_index(letter);
                table[i][index] += delta;
                for row in &mut table {
                    row[index] += CROSS_POSITION_CREDIT * delta;
                }
            }
        }

        for (i, row) in table.iter_mut().enumerate() {
            if let Some(letter) = state.matched(i) {
                row[letter_index(letter)] = 0.0;
            }
            for letter in state.misplaced(i).letters() {
                row[letter_index(letter)] = 0.0;
            }
        }

        Self { table }
    }

    /// Weight of `letter` at `position`
    #[inline]
    #[must_use]
    pub fn weight(&self, position: usize, letter: u8) -> f64 {
        self.table[position][letter_index(letter)]
    }

    /// Score a guess by summing the weights of its distinct letters
    ///
    /// A repeated letter only counts at its first position.
    #[must_use]
    pub fn score(&self, guess: &Word) -> f64 {
        let mut seen = 0u32;
        let mut score = 0.0;

        for (i, &letter) in guess.letters().iter().enumerate() {
            let bit = 1 << letter_index(letter);
            if seen & bit == 0 {
                seen |= bit;
                score += self.weight(i, letter);
            }
        }

        score
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn positional_and_cross_credit() {
        let candidates = words(&["crate", "grate", "irate"]);
        let weights = LetterWeights::new(&candidates, &ConstraintState::new());

        // 'c' once at position 0: 1/3 + 0.25/3
        assert!(approx(weights.weight(0, b'c'), 5.0 / 12.0));
        // 'r' at position 1 in all three: 1 + 0.25
        assert!(approx(weights.weight(1, b'r'), 1.25));
        // 'c' only gets cross credit away from position 0
        assert!(approx(weights.weight(3, b'c'), 0.25 / 3.0));
        assert!(approx(weights.weight(2, b'z'), 0.0));
    }

    #[test]
    fn repeated_letters_count_once() {
        let candidates = words(&["crate", "grate", "irate"]);
        let weights = LetterWeights::new(&candidates, &ConstraintState::new());

        // 'a' at position 0 only carries cross credit: 3 × 0.25/3
        assert!(approx(weights.score(&Word::new("aaaaa").unwrap()), 0.25));
        assert!(approx(
            weights.score(&Word::new("crate").unwrap()),
            65.0 / 12.0
        ));
    }

    #[test]
    fn known_letters_are_zeroed() {
        let candidates = words(&["crate", "grate", "irate"]);
        let answer = Word::new("crate").unwrap();
        let state = ConstraintState::compute_delta(&answer, &Word::new("slate").unwrap());
        let weights = LetterWeights::new(&candidates, &state);

        // a, t, e are green at 2, 3, 4
        assert!(approx(weights.weight(2, b'a'), 0.0));
        assert!(approx(weights.weight(3, b't'), 0.0));
        assert!(approx(weights.weight(4, b'e'), 0.0));
        // matched positions add no credit anywhere
        assert!(approx(weights.weight(0, b'a'), 0.0));
        assert!(approx(weights.weight(1, b'r'), 1.25));
    }

    #[test]
    fn misplaced_letters_are_zeroed_at_their_position() {
        let candidates = words(&["taper", "paper"]);
        let answer = Word::new("taper").unwrap();
        let state = ConstraintState::compute_delta(&answer, &Word::new("aloes").unwrap());
        let weights = LetterWeights::new(&candidates, &state);

        assert!(approx(weights.weight(0, b'a'), 0.0));
        assert!(weights.weight(1, b'a') > 0.0);
    }

    #[test]
    #[should_panic(expected = "at least one candidate")]
    fn empty_candidates_panic() {
        let _ = LetterWeights::new(&[], &ConstraintState::new());
    }
}

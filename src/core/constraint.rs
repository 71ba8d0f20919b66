//! Accumulated knowledge about the hidden answer
//!
//! A `ConstraintState` records which letters are fixed at which positions,
//! which letters are known to be elsewhere, and which letters are absent.
//! States are small `Copy` values; merging two states yields a new one.

use super::clue::{Clue, ClueVector};
use super::word::{LetterMask, WORD_LENGTH, Word};
use std::fmt;

/// Constraints derived from one or more clues against the same answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConstraintState {
    matched: [Option<u8>; WORD_LENGTH],
    misplaced: [LetterMask; WORD_LENGTH],
    used: LetterMask,
    unused: LetterMask,
}

impl ConstraintState {
    /// State with no knowledge: every word is consistent with it
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constraints learned from playing `guess` against `answer`
    ///
    /// Matched positions are recorded first. Every other guess letter is
    /// misplaced at its position if the answer holds it at a position the
    /// guess did not match, and unused if the answer lacks it entirely.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{ConstraintState, Word};
    ///
    /// let answer = Word::new("taper").unwrap();
    /// let delta = ConstraintState::compute_delta(&answer, &Word::new("aloes").unwrap());
    ///
    /// assert_eq!(delta.matched(3), Some(b'e'));
    /// assert!(delta.misplaced(0).contains(b'a'));
    /// assert!(delta.is_consistent_with(&answer));
    /// ```
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index needed across guess, answer and both tables
    pub fn compute_delta(answer: &Word, guess: &Word) -> Self {
        let answer_letters = answer.letters();
        let guess_letters = guess.letters();
        let mut delta = Self::new();

        for i in 0..WORD_LENGTH {
            if guess_letters[i] == answer_letters[i] {
                delta.matched[i] = Some(guess_letters[i]);
            }
        }

        for i in 0..WORD_LENGTH {
            if delta.matched[i].is_some() {
                continue;
            }
            let letter = guess_letters[i];
            if !answer.has_letter(letter) {
                delta.unused |= LetterMask::of_letter(letter);
            } else if (0..WORD_LENGTH)
                .any(|j| answer_letters[j] == letter && guess_letters[j] != answer_letters[j])
            {
                delta.misplaced[i] |= LetterMask::of_letter(letter);
            }
        }

        delta.refresh_used();
        delta
    }

    /// Rebuild the constraints of a guess from the clues it received
    ///
    /// Yields the same state as [`ConstraintState::compute_delta`] for clues
    /// produced by [`ClueVector::compute`]. A gray letter counts as unused
    /// unless the same letter is green elsewhere in the guess.
    #[must_use]
    pub fn from_clues(guess: &Word, clues: &ClueVector) -> Self {
        let letters = guess.letters();
        let mut state = Self::new();

        for (i, (&letter, &clue)) in letters.iter().zip(clues.clues()).enumerate() {
            match clue {
                Clue::Green => state.matched[i] = Some(letter),
                Clue::Yellow => state.misplaced[i] |= LetterMask::of_letter(letter),
                Clue::Gray => {}
            }
        }

        for (&letter, &clue) in letters.iter().zip(clues.clues()) {
            let green_elsewhere = state.matched.contains(&Some(letter));
            if clue == Clue::Gray && !green_elsewhere {
                state.unused |= LetterMask::of_letter(letter);
            }
        }

        state.refresh_used();
        state
    }

    /// Merge two states describing the same answer
    ///
    /// # Panics
    /// Panics if the states fix different letters at the same position,
    /// which cannot happen for clues against a single answer.
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index needed across both inputs and the result
    pub fn combine(&self, other: &Self) -> Self {
        let mut combined = Self {
            used: self.used | other.used,
            unused: self.unused | other.unused,
            ..Self::default()
        };

        for i in 0..WORD_LENGTH {
            if let (Some(a), Some(b)) = (self.matched[i], other.matched[i]) {
                assert_eq!(
                    a, b,
                    "conflicting matched letters at position {i}: '{}' vs '{}'",
                    a as char, b as char
                );
            }
            combined.matched[i] = self.matched[i].or(other.matched[i]);

            let fixed = combined.matched[i].map_or(LetterMask::EMPTY, LetterMask::of_letter);
            combined.misplaced[i] = (self.misplaced[i] | other.misplaced[i]).without(fixed);
        }

        combined.refresh_used();
        combined
    }

    /// Check whether `word` could still be the answer
    #[must_use]
    pub fn is_consistent_with(&self, word: &Word) -> bool {
        let mask = word.mask();

        if !mask.contains_all(self.used) || mask.intersects(self.unused) {
            return false;
        }

        word.letters()
            .iter()
            .zip(self.matched.iter().zip(&self.misplaced))
            .all(|(&letter, (&fixed, &elsewhere))| {
                fixed.is_none_or(|m| m == letter) && !elsewhere.contains(letter)
            })
    }

    /// Check whether `word` is a legal hard-mode guess
    ///
    /// Hard mode requires every confirmed letter to be used and every green
    /// letter to stay in place. Misplaced positions and absent letters are
    /// not enforced.
    #[must_use]
    pub fn allows_hard_mode_guess(&self, word: &Word) -> bool {
        word.mask().contains_all(self.used)
            && word
                .letters()
                .iter()
                .zip(&self.matched)
                .all(|(&letter, &fixed)| fixed.is_none_or(|m| m == letter))
    }

    /// The required letter at `position`, if known
    #[inline]
    #[must_use]
    pub const fn matched(&self, position: usize) -> Option<u8> {
        self.matched[position]
    }

    /// Letters present in the answer but not at `position`
    #[inline]
    #[must_use]
    pub const fn misplaced(&self, position: usize) -> LetterMask {
        self.misplaced[position]
    }

    /// Letters confirmed present somewhere in the answer
    #[inline]
    #[must_use]
    pub const fn used(&self) -> LetterMask {
        self.used
    }

    /// Letters confirmed absent from the answer
    #[inline]
    #[must_use]
    pub const fn unused(&self) -> LetterMask {
        self.unused
    }

    /// Number of positions whose letter is known
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.iter().flatten().count()
    }

    fn refresh_used(&mut self) {
        for (fixed, &elsewhere) in self.matched.iter().zip(&self.misplaced) {
            self.used |= elsewhere;
            if let Some(letter) = *fixed {
                self.used |= LetterMask::of_letter(letter);
            }
        }
        debug_assert!(
            !self.used.intersects(self.unused),
            "letters both present and absent: {}",
            self.used & self.unused
        );
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matched:")?;
        for (i, fixed) in self.matched.iter().enumerate() {
            if let Some(letter) = fixed {
                write!(f, " {}@{i}", *letter as char)?;
            }
        }

        write!(f, " | misplaced:")?;
        for (i, elsewhere) in self.misplaced.iter().enumerate() {
            for letter in elsewhere.letters() {
                write!(f, " {}@{i}", letter as char)?;
            }
        }

        write!(f, " | unused: {}", self.unused)
    }
}

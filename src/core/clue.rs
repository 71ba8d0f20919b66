//! Per-letter feedback for a guess
//!
//! A `ClueVector` holds one `Clue` per guess position. Clues follow the
//! *unmatched-occurrence rule*: a letter that is not green is yellow when the
//! answer holds that letter at some position the guess did not already match.
//! A guess with a repeated letter can therefore collect several yellows for a
//! single unmatched answer occurrence (`speed` against `abide` is `--YYY`).
//!
//! Each vector also has a compact base-3 code (0-242), where position `i`
//! contributes `digit × 3^i` with Gray = 0, Yellow = 1 and Green = 2.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Letter not in the answer (or all of its occurrences are already matched)
    Gray,
    /// Letter in the answer at another, unmatched position
    Yellow,
    /// Letter in the correct position
    Green,
}

impl Clue {
    const fn digit(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// Square emoji for this clue
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Clues for all five positions of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClueVector([Clue; WORD_LENGTH]);

impl ClueVector {
    /// All greens (the guess is the answer)
    pub const SOLVED: Self = Self([Clue::Green; WORD_LENGTH]);

    /// Number of distinct clue vectors (3^5)
    pub const COUNT: usize = 243;

    #[must_use]
    pub const fn new(clues: [Clue; WORD_LENGTH]) -> Self {
        Self(clues)
    }

    /// Calculate the clues shown when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches green
    /// 2. Second pass: mark a remaining letter yellow if any answer position
    ///    holding it is not itself a green
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{ClueVector, Word};
    ///
    /// let answer = Word::new("taper").unwrap();
    /// let guess = Word::new("aloes").unwrap();
    /// let clues = ClueVector::compute(&answer, &guess);
    ///
    /// assert_eq!(clues.to_string(), "Y--G-");
    /// assert_eq!(clues.code(), 55);
    /// ```
    #[must_use]
    // Index needed to compare guess[i] with answer[j] and set clues[i]
    #[allow(clippy::needless_range_loop)]
    pub fn compute(answer: &Word, guess: &Word) -> Self {
        let answer = answer.letters();
        let guess = guess.letters();
        let mut clues = [Clue::Gray; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                clues[i] = Clue::Green;
            }
        }

        for i in 0..WORD_LENGTH {
            if clues[i] == Clue::Green {
                continue;
            }
            let unmatched_elsewhere =
                (0..WORD_LENGTH).any(|j| answer[j] == guess[i] && guess[j] != answer[j]);
            if unmatched_elsewhere {
                clues[i] = Clue::Yellow;
            }
        }

        Self(clues)
    }

    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &[Clue; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Clue {
        self.0[position]
    }

    /// Check if every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Base-3 code in `0..243`
    #[must_use]
    pub fn code(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, clue| acc * 3 + clue.digit())
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&c| c == Clue::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&c| c == Clue::Yellow).count()
    }

    /// Parse clues from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::ClueVector;
    ///
    /// let p1 = ClueVector::parse("GY-GY").unwrap();
    /// let p2 = ClueVector::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut clues = [Clue::Gray; WORD_LENGTH];
        let mut count = 0;

        for ch in s.chars() {
            let clue = match ch {
                'G' | 'g' | '🟩' => Clue::Green,
                'Y' | 'y' | '🟨' => Clue::Yellow,
                '-' | '_' | '⬜' => Clue::Gray,
                _ => return None,
            };
            *clues.get_mut(count)? = clue;
            count += 1;
        }

        (count == WORD_LENGTH).then_some(Self(clues))
    }

    /// Convert clues to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for ClueVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in &self.0 {
            let ch = match clue {
                Clue::Gray => '-',
                Clue::Yellow => 'Y',
                Clue::Green => 'G',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ClueVector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid clue string: {s}"))
    }
}

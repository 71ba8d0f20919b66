//! Wordle word representation
//!
//! A `Word` stores its five letters together with a 26-bit `LetterMask` of the
//! letters it contains, so consistency checks never rescan the word.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Set of letters `a..=z`, one bit per letter
///
/// Position- and count-agnostic: the two `e`s of `"speed"` set a single bit,
/// so `"speed"` and `"deeps"` have identical masks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterMask(u32);

impl LetterMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Mask holding a single lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn of_letter(letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        Self(1 << (letter - b'a'))
    }

    /// Mask of every letter appearing anywhere in `letters`
    #[must_use]
    pub const fn of_letters(letters: &[u8; WORD_LENGTH]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < WORD_LENGTH {
            bits |= 1 << (letters[i] - b'a');
            i += 1;
        }
        Self(bits)
    }

    /// Raw bit representation (bit 0 = `a`)
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::of_letter(letter).0 != 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters of `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl BitOr for LetterMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LetterMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// A 5-letter Wordle word
///
/// Immutable and `Copy`; the letter mask is computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
    mask: LetterMask,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    ///
    /// let word = Word::new("Taper").unwrap();
    /// assert_eq!(word.text(), "taper");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self::from_letters(letters))
    }

    /// Build a word from letters already known to be lowercase ASCII
    ///
    /// Intended for constants such as the default opening guess.
    #[must_use]
    pub const fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        Self {
            letters,
            mask: LetterMask::of_letters(&letters),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters validated as ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// The set of letters appearing anywhere in the word
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.mask.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Words, clues and constraint states are small `Copy` values built on 26-bit letter masks.

pub mod candidates;
mod clue;
mod constraint;
mod word;

pub use candidates::{count_consistent, filter};
pub use clue::{Clue, ClueVector};
pub use constraint::ConstraintState;
pub use word::{LetterMask, WORD_LENGTH, Word, WordError};

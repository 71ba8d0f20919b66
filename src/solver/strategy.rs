//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{ConstraintState, Word};

/// A strategy for selecting the next guess
///
/// Implementations are pure functions of the guess pool, the current
/// candidates and the accumulated constraints. They must be `Sync` so one
/// solver can serve parallel batch runs.
pub trait Strategy: Sync {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess<'a>(
        &self,
        guess_pool: &[&'a Word],
        candidates: &[Word],
        state: &ConstraintState,
    ) -> Option<&'a Word>;

    /// Short name used in reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter-frequency heuristic
    Entropy(EntropyStrategy),
    /// Exhaustive worst-case minimization
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &[&'a Word],
        candidates: &[Word],
        state: &ConstraintState,
    ) -> Option<&'a Word> {
        match self {
            Self::Entropy(s) => s.select_guess(guess_pool, candidates, state),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates, state),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Entropy(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["minimax", "entropy"];

    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "entropy". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minimax" => Some(Self::Minimax(MinimaxStrategy)),
            "entropy" => Some(Self::Entropy(EntropyStrategy)),
            _ => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Entropy-heuristic strategy
///
/// Selects the guess whose distinct letters carry the most candidate weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &[&'a Word],
        candidates: &[Word],
        state: &ConstraintState,
    ) -> Option<&'a Word> {
        super::entropy::select_best_guess(guess_pool, candidates, state).map(|(best, _)| best)
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &[&'a Word],
        candidates: &[Word],
        state: &ConstraintState,
    ) -> Option<&'a Word> {
        super::minimax::select_best_guess(guess_pool, candidates, state).map(|(best, _)| best)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

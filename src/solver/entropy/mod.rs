//! Entropy-heuristic guess selection
//!
//! A cheap proxy for information gain: letters frequent among the remaining
//! candidates, at the positions they occupy, earn the most credit.

mod calculator;
mod selector;

pub use calculator::LetterWeights;
pub use selector::select_best_guess;

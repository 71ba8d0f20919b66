//! Offline guess analysis
//!
//! Exact Shannon entropy of every guess over the clue partitions it induces on
//! the answer list. Used for reporting only; the solve loop never calls it.

mod calculator;
mod ranking;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, group_by_clue, shannon_entropy,
};
pub use ranking::{RankedGuess, rank_guesses};

//! Exact Shannon entropy over clue partitions
//!
//! Given a guess and a set of possible answers, groups the answers by the clue
//! vector they would produce and measures how evenly the guess splits them.

use crate::core::{ClueVector, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Partition statistics for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of answers left after this guess
    pub expected_remaining: f64,
    /// Largest partition (worst-case answers left)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against possible answers
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the share of answers that produce clue vector x.
///
/// # Examples
/// ```
/// use wordle_solver::analysis::calculate_entropy;
/// use wordle_solver::core::Word;
///
/// let guess = Word::new("crane").unwrap();
/// let answers = [Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &answers);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, answers: &[Word]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_clue(guess, answers))
}

/// Count how many answers produce each clue vector for `guess`
#[must_use]
pub fn group_by_clue(guess: &Word, answers: &[Word]) -> FxHashMap<ClueVector, usize> {
    let mut counts = FxHashMap::default();

    for answer in answers {
        *counts.entry(ClueVector::compute(answer, guess)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a clue distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one clue vector with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n clue vectors
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<ClueVector, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining answers and worst-case partition
#[must_use]
pub fn calculate_metrics(guess: &Word, answers: &[Word]) -> GuessMetrics {
    if answers.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = group_by_clue(guess, answers);
    let total = answers.len() as f64;

    let expected_remaining = counts
        .values()
        .map(|&size| {
            let size = size as f64;
            size * size / total
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
    }
}

//! Rank every guess by exact entropy

use super::calculator::{GuessMetrics, calculate_metrics};
use crate::core::Word;
use rayon::prelude::*;

/// A guess together with its partition statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub metrics: GuessMetrics,
}

/// Score every guess against `answers`, best first
///
/// Sorted by descending entropy. Guesses with equal entropy keep their
/// order in `guesses`.
#[must_use]
pub fn rank_guesses(guesses: &[Word], answers: &[Word]) -> Vec<RankedGuess> {
    let mut ranked: Vec<RankedGuess> = guesses
        .par_iter()
        .map(|word| RankedGuess {
            word: *word,
            metrics: calculate_metrics(word, answers),
        })
        .collect();

    ranked.sort_by(|a, b| b.metrics.entropy.total_cmp(&a.metrics.entropy));

    if let Some(best) = ranked.first() {
        log::trace!(
            "best analysed guess {} at {:.4} bits",
            best.word,
            best.metrics.entropy
        );
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn ranks_by_entropy_with_stable_ties() {
        let guesses = words(&["zzzzz", "crane", "slate"]);
        let answers = words(&["slate", "irate", "trace", "raise"]);

        let ranked = rank_guesses(&guesses, &answers);
        let order: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();

        // crane and slate both split all four answers apart
        assert_eq!(order, ["crane", "slate", "zzzzz"]);
        assert!((ranked[0].metrics.entropy - 2.0).abs() < 1e-9);
        assert!(ranked[2].metrics.entropy.abs() < 1e-9);
        assert_eq!(ranked[0].metrics.max_partition, 1);
    }

    #[test]
    fn empty_guesses() {
        let answers = words(&["slate"]);
        assert!(rank_guesses(&[], &answers).is_empty());
    }
}

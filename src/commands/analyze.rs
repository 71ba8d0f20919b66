//! Guess analysis command
//!
//! Ranks every guess by exact entropy over the answer list.

use crate::analysis::{RankedGuess, rank_guesses};
use crate::wordlists::Vocabulary;
use std::time::{Duration, Instant};

/// Top of the entropy ranking
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Best guesses, highest entropy first
    pub ranking: Vec<RankedGuess>,
    pub guesses_scored: usize,
    pub answers: usize,
    pub duration: Duration,
}

impl AnalysisReport {
    /// Upper bound on entropy: every answer in its own partition
    #[must_use]
    pub fn max_bits(&self) -> f64 {
        (self.answers as f64).log2()
    }
}

/// Score every guess in `vocabulary` and keep the best `top`
#[must_use]
pub fn analyze(vocabulary: &Vocabulary, top: usize) -> AnalysisReport {
    let start = Instant::now();
    let mut ranking = rank_guesses(vocabulary.guesses(), vocabulary.answers());
    ranking.truncate(top);

    AnalysisReport {
        ranking,
        guesses_scored: vocabulary.guesses().len(),
        answers: vocabulary.answers().len(),
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn keeps_top_guesses() {
        let vocabulary = Vocabulary::new(
            words(&["zzzzz", "crane", "slate", "irate", "trace", "raise"]),
            words(&["slate", "irate", "trace", "raise"]),
        )
        .unwrap();

        let report = analyze(&vocabulary, 2);

        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.ranking[0].word.text(), "crane");
        assert_eq!(report.guesses_scored, 6);
        assert_eq!(report.answers, 4);
        assert!((report.max_bits() - 2.0).abs() < 1e-9);
        assert!(report.ranking.iter().all(|r| r.metrics.entropy <= report.max_bits() + 1e-9));
    }

    #[test]
    fn embedded_ranking_is_sorted() {
        let report = analyze(&Vocabulary::embedded(), 10);

        assert_eq!(report.ranking.len(), 10);
        assert!(
            report
                .ranking
                .windows(2)
                .all(|w| w[0].metrics.entropy >= w[1].metrics.entropy)
        );
    }
}

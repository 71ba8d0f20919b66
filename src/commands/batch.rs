//! Batch evaluation over the answer list
//!
//! Runs the solver against every answer word (or the first `limit`) in
//! parallel and collects an attempts histogram.

use crate::core::Word;
use crate::solver::{SolveError, SolveReport, SolveState, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// How many of the slowest answers a batch keeps
const HARDEST_KEPT: usize = 10;

/// Attempts distribution for a batch run
///
/// `buckets[n]` counts answers solved in exactly `n` attempts. Sessions that
/// ran out of attempts land in `failures` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: Vec<usize>,
    failures: usize,
}

impl Histogram {
    /// Empty histogram with buckets `0..=max_attempts`
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            buckets: vec![0; max_attempts + 1],
            failures: 0,
        }
    }

    /// Count one finished session
    pub fn record(&mut self, report: &SolveReport) {
        match report.state {
            SolveState::Solved => self.buckets[report.attempts()] += 1,
            SolveState::Failed | SolveState::Guessing => self.failures += 1,
        }
    }

    /// Add another histogram's counts into this one
    ///
    /// # Panics
    /// Panics if the two histograms have different bucket ranges.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        assert_eq!(
            self.buckets.len(),
            other.buckets.len(),
            "cannot merge histograms with different attempt limits"
        );
        for (mine, theirs) in self.buckets.iter_mut().zip(&other.buckets) {
            *mine += theirs;
        }
        self.failures += other.failures;
        self
    }

    #[must_use]
    pub fn buckets(&self) -> &[usize] {
        &self.buckets
    }

    /// Answers solved in exactly `attempts` attempts
    #[must_use]
    pub fn count(&self, attempts: usize) -> usize {
        self.buckets.get(attempts).copied().unwrap_or(0)
    }

    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Answers solved within the attempt limit
    #[must_use]
    pub fn solved(&self) -> usize {
        self.buckets.iter().sum()
    }

    /// Every answer evaluated
    #[must_use]
    pub fn total(&self) -> usize {
        self.solved() + self.failures
    }

    /// Mean attempts over solved answers, 0.0 when none were solved
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let attempts: usize = self
            .buckets
            .iter()
            .enumerate()
            .map(|(n, count)| n * count)
            .sum();
        attempts as f64 / solved as f64
    }

    /// Largest bucket, used to scale bars
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.buckets.iter().copied().max().unwrap_or(0)
    }
}

/// Statistics from a batch run
#[derive(Debug, Clone)]
pub struct BatchStatistics {
    pub strategy: &'static str,
    pub histogram: Histogram,
    /// Answers the solver gave up on, in answer-list order
    pub failed_words: Vec<Word>,
    /// Solved answers that took the most attempts, worst first
    pub hardest_words: Vec<(Word, usize)>,
    pub total_time: Duration,
}

impl BatchStatistics {
    #[must_use]
    pub fn per_word(&self) -> Duration {
        match u32::try_from(self.histogram.total()) {
            Ok(total) if total > 0 => self.total_time / total,
            _ => Duration::ZERO,
        }
    }
}

/// Per-worker accumulator for the parallel fold
struct Tally {
    histogram: Histogram,
    failed: Vec<Word>,
    solved: Vec<(Word, usize)>,
}

impl Tally {
    fn new(max_attempts: usize) -> Self {
        Self {
            histogram: Histogram::new(max_attempts),
            failed: Vec::new(),
            solved: Vec::new(),
        }
    }

    fn add(mut self, report: &SolveReport) -> Self {
        self.histogram.record(report);
        if report.is_solved() {
            self.solved.push((report.answer, report.attempts()));
        } else {
            self.failed.push(report.answer);
        }
        self
    }

    fn combine(mut self, other: Self) -> Self {
        self.histogram = self.histogram.merge(&other.histogram);
        self.failed.extend(other.failed);
        self.solved.extend(other.solved);
        self
    }
}

/// Run the solver on every answer word, or the first `limit` of them
///
/// # Errors
///
/// Returns the first `SolveError` hit by any session, such as an answer
/// missing from the solver's answer pool.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_batch<S: Strategy>(
    solver: &Solver<'_, S>,
    answers: &[Word],
    limit: Option<usize>,
) -> Result<BatchStatistics, SolveError> {
    let answers = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];
    let max_attempts = solver.config().max_attempts;

    log::info!(
        "batch start: {} answers with {} strategy",
        answers.len(),
        solver.strategy().name()
    );

    let pb = ProgressBar::new(answers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(solver.strategy().name());

    let start = Instant::now();

    let tally = answers
        .par_iter()
        .try_fold(
            || Tally::new(max_attempts),
            |tally, answer| -> Result<Tally, SolveError> {
                let report = solver.solve(answer)?;
                pb.inc(1);
                Ok(tally.add(&report))
            },
        )
        .try_reduce(|| Tally::new(max_attempts), |a, b| Ok(a.combine(b)));

    let tally = match tally {
        Ok(tally) => tally,
        Err(e) => {
            pb.abandon_with_message("aborted");
            return Err(e);
        }
    };

    pb.finish_with_message("complete");
    let total_time = start.elapsed();

    let mut hardest_words = tally.solved;
    hardest_words.sort_by_key(|&(word, attempts)| (Reverse(attempts), word));
    hardest_words.truncate(HARDEST_KEPT);

    log::info!(
        "batch finish: {} solved, {} failed in {:.2}s",
        tally.histogram.solved(),
        tally.histogram.failures(),
        total_time.as_secs_f64()
    );

    Ok(BatchStatistics {
        strategy: solver.strategy().name(),
        histogram: tally.histogram,
        failed_words: tally.failed,
        hardest_words,
        total_time,
    })
}

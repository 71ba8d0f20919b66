//! Word solving command
//!
//! Solves a single answer and records what the solver knew after each round.

use crate::core::{ClueVector, ConstraintState, Word};
use crate::solver::{SolveError, SolveState, Solver, Strategy};

/// Remaining candidates are listed in full at or below this count
pub const LIST_REMAINING_BELOW: usize = 30;

/// A single round of a verbose solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptStep {
    pub guess: Word,
    pub clues: ClueVector,
    /// Constraints merged over every round so far
    pub constraints: ConstraintState,
    pub remaining: usize,
    /// The remaining candidates, when few enough to list
    pub remaining_words: Option<Vec<Word>>,
}

/// Round-by-round record of solving one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTranscript {
    pub answer: Word,
    pub strategy: &'static str,
    pub steps: Vec<TranscriptStep>,
    pub state: SolveState,
}

impl SolveTranscript {
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// Solve `answer` and keep per-round diagnostics
///
/// # Errors
///
/// Returns an error if the answer is not in the solver's answer pool or no
/// guess can be chosen.
pub fn solve_verbose<S: Strategy>(
    solver: &Solver<'_, S>,
    answer: &Word,
) -> Result<SolveTranscript, SolveError> {
    let mut session = solver.session(*answer)?;
    let mut steps = Vec::new();

    loop {
        let state = session.advance()?;

        if let Some(round) = session.rounds().last() {
            let candidates = session.candidates();
            steps.push(TranscriptStep {
                guess: round.guess,
                clues: round.clues,
                constraints: *session.constraints(),
                remaining: round.remaining,
                remaining_words: (candidates.len() <= LIST_REMAINING_BELOW)
                    .then(|| candidates.to_vec()),
            });
        }

        if state != SolveState::Guessing {
            return Ok(SolveTranscript {
                answer: *answer,
                strategy: solver.strategy().name(),
                steps,
                state,
            });
        }
    }
}

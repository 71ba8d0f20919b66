//! Main Wordle solver interface
//!
//! A `Session` runs the guess → clue → merge → filter → select loop for one
//! answer. Each round replaces the constraint state and candidate list with
//! fresh values, so sessions for different answers share nothing but the
//! read-only word lists.

use super::strategy::Strategy;
use crate::core::{ClueVector, ConstraintState, Word, filter};
use std::fmt;

/// Opening guess used when none is configured
pub const DEFAULT_OPENING: Word = Word::from_letters(*b"aloes");

/// Rounds allowed before a session gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 9;

/// Solver settings threaded through every session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// First guess of every session, independent of the answer
    pub opening: Word,
    /// Maximum number of rounds before the session fails
    pub max_attempts: usize,
    /// Restrict guesses to those using every confirmed letter correctly
    pub hard_mode: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening: DEFAULT_OPENING,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hard_mode: false,
        }
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// More rounds to play
    Guessing,
    /// Exactly one candidate remains
    Solved,
    /// Attempts exhausted with several candidates left
    Failed,
}

/// One round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub clues: ClueVector,
    /// Candidates left after merging this round's clues
    pub remaining: usize,
}

/// Full record of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub answer: Word,
    pub rounds: Vec<Round>,
    pub state: SolveState,
}

impl SolveReport {
    /// Number of rounds played
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SolveState::Solved
    }
}

/// Errors from setting up or advancing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The answer is not in the answer word list
    UnknownAnswer(Word),
    /// No word in the guess pool is playable
    NoGuessAvailable { attempt: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAnswer(word) => write!(f, "'{word}' is not in the answer word list"),
            Self::NoGuessAvailable { attempt } => {
                write!(f, "no playable guess after attempt {attempt}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Main Wordle solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    guess_pool: &'a [Word],
    answer_pool: &'a [Word],
    config: SolverConfig,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word lists
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `guess_pool`: All valid guessable words
    /// - `answer_pool`: Words that can be answers; the initial candidate set
    /// - `config`: Opening guess, attempt limit and hard mode
    ///
    /// # Panics
    /// Panics if `config.max_attempts` is 0.
    #[must_use]
    pub const fn new(
        strategy: S,
        guess_pool: &'a [Word],
        answer_pool: &'a [Word],
        config: SolverConfig,
    ) -> Self {
        assert!(config.max_attempts >= 1, "max_attempts must be at least 1");
        Self {
            strategy,
            guess_pool,
            answer_pool,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn guess_pool(&self) -> &'a [Word] {
        self.guess_pool
    }

    #[must_use]
    pub const fn answer_pool(&self) -> &'a [Word] {
        self.answer_pool
    }

    /// Choose the next guess for the given candidates and constraints
    ///
    /// In hard mode only guesses allowed by `state` are considered.
    ///
    /// # Errors
    /// Returns `SolveError::NoGuessAvailable` if no guess is playable.
    pub fn next_guess(
        &self,
        candidates: &[Word],
        state: &ConstraintState,
        attempt: usize,
    ) -> Result<&'a Word, SolveError> {
        let pool: Vec<&'a Word> = self
            .guess_pool
            .iter()
            .filter(|word| !self.config.hard_mode || state.allows_hard_mode_guess(word))
            .collect();

        self.strategy
            .select_guess(&pool, candidates, state)
            .ok_or(SolveError::NoGuessAvailable { attempt })
    }

    /// Start a session for `answer`
    ///
    /// # Errors
    /// Returns `SolveError::UnknownAnswer` if `answer` is not in the answer pool.
    pub fn session(&self, answer: Word) -> Result<Session<'_, 'a, S>, SolveError> {
        Session::new(self, answer)
    }

    /// Run a full session for `answer`
    ///
    /// # Errors
    /// Returns an error if the answer is unknown or no guess can be chosen.
    pub fn solve(&self, answer: &Word) -> Result<SolveReport, SolveError> {
        let mut session = self.session(*answer)?;
        while session.advance()? == SolveState::Guessing {}
        Ok(session.into_report())
    }
}

/// One solve run, advanced a round at a time
pub struct Session<'s, 'a, S: Strategy> {
    solver: &'s Solver<'a, S>,
    answer: Word,
    state: ConstraintState,
    candidates: Vec<Word>,
    guess: Word,
    rounds: Vec<Round>,
    status: SolveState,
}

impl<'s, 'a, S: Strategy> Session<'s, 'a, S> {
    fn new(solver: &'s Solver<'a, S>, answer: Word) -> Result<Self, SolveError> {
        if !solver.answer_pool.contains(&answer) {
            return Err(SolveError::UnknownAnswer(answer));
        }

        Ok(Self {
            solver,
            answer,
            state: ConstraintState::new(),
            candidates: solver.answer_pool.to_vec(),
            guess: solver.config.opening,
            rounds: Vec::new(),
            status: SolveState::Guessing,
        })
    }

    /// Play the pending guess and move to the next state
    ///
    /// Does nothing once the session is solved or failed.
    ///
    /// # Errors
    /// Returns `SolveError::NoGuessAvailable` if a follow-up guess is needed
    /// but none is playable.
    ///
    /// # Panics
    /// Panics if filtering leaves no candidates; the answer always survives.
    pub fn advance(&mut self) -> Result<SolveState, SolveError> {
        if self.status != SolveState::Guessing {
            return Ok(self.status);
        }
        if self.rounds.len() >= self.solver.config.max_attempts {
            self.status = SolveState::Failed;
            return Ok(self.status);
        }

        let guess = self.guess;
        let clues = ClueVector::compute(&self.answer, &guess);
        let delta = ConstraintState::compute_delta(&self.answer, &guess);

        self.state = self.state.combine(&delta);
        self.candidates = filter(&self.candidates, &self.state);
        assert!(
            !self.candidates.is_empty(),
            "no candidates left for answer {} after guessing {guess}",
            self.answer
        );

        self.rounds.push(Round {
            guess,
            clues,
            remaining: self.candidates.len(),
        });
        let attempt = self.rounds.len();

        log::debug!(
            "{}: attempt {attempt} guessed {guess} -> {clues} (code {}), {} candidates left",
            self.answer,
            clues.code(),
            self.candidates.len()
        );

        if self.candidates.len() == 1 {
            self.status = SolveState::Solved;
        } else if attempt >= self.solver.config.max_attempts {
            self.status = SolveState::Failed;
        } else {
            self.guess = *self
                .solver
                .next_guess(&self.candidates, &self.state, attempt)?;
        }

        Ok(self.status)
    }

    #[must_use]
    pub const fn status(&self) -> SolveState {
        self.status
    }

    /// The guess the next call to `advance` will play
    #[must_use]
    pub fn pending_guess(&self) -> Option<Word> {
        (self.status == SolveState::Guessing).then_some(self.guess)
    }

    /// Constraints accumulated so far
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.state
    }

    /// Words still consistent with every clue
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub fn into_report(self) -> SolveReport {
        SolveReport {
            answer: self.answer,
            rounds: self.rounds,
            state: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, MinimaxStrategy, StrategyType};

    const ANSWERS: [&str; 12] = [
        "crate", "grate", "irate", "taper", "paper", "caper", "abide", "speed", "floor", "erase",
        "slate", "crane",
    ];

    fn setup_words() -> (Vec<Word>, Vec<Word>) {
        let answers: Vec<Word> = ANSWERS.iter().map(|w| Word::new(w).unwrap()).collect();
        let mut guesses = answers.clone();
        for extra in ["aloes", "magic", "cigar"] {
            guesses.push(Word::new(extra).unwrap());
        }
        (guesses, answers)
    }

    #[test]
    fn opening_word_as_answer_takes_one_attempt() {
        let (guesses, mut answers) = setup_words();
        answers.push(DEFAULT_OPENING);

        let solver = Solver::new(
            MinimaxStrategy,
            &guesses,
            &answers,
            SolverConfig::default(),
        );
        let report = solver.solve(&DEFAULT_OPENING).unwrap();

        assert_eq!(report.state, SolveState::Solved);
        assert_eq!(report.attempts(), 1);
        assert!(report.rounds[0].clues.is_solved());
    }

    #[test]
    fn solves_every_answer_with_both_strategies() {
        let (guesses, answers) = setup_words();
        let minimax_attempts = [2, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 2];
        let entropy_attempts = [2, 3, 3, 2, 3, 3, 1, 1, 1, 1, 1, 2];

        for (strategy, expected) in [
            (StrategyType::Minimax(MinimaxStrategy), minimax_attempts),
            (StrategyType::Entropy(EntropyStrategy), entropy_attempts),
        ] {
            let solver = Solver::new(strategy, &guesses, &answers, SolverConfig::default());
            for (answer, attempts) in answers.iter().zip(expected) {
                let report = solver.solve(answer).unwrap();
                assert!(report.is_solved(), "{answer}");
                assert_eq!(report.attempts(), attempts, "{} on {answer}", strategy.name());
            }
        }
    }

    #[test]
    fn candidates_shrink_every_round() {
        let (guesses, answers) = setup_words();
        let solver = Solver::new(
            MinimaxStrategy,
            &guesses,
            &answers,
            SolverConfig::default(),
        );

        let report = solver.solve(&Word::new("irate").unwrap()).unwrap();
        assert!(report.rounds.windows(2).all(|r| r[1].remaining <= r[0].remaining));
        assert_eq!(report.rounds.last().unwrap().remaining, 1);
    }

    #[test]
    fn fails_when_attempts_run_out() {
        let (guesses, answers) = setup_words();
        let config = SolverConfig {
            max_attempts: 1,
            ..SolverConfig::default()
        };
        let solver = Solver::new(MinimaxStrategy, &guesses, &answers, config);

        // aloes leaves crate, grate, irate and crane
        let report = solver.solve(&Word::new("crate").unwrap()).unwrap();
        assert_eq!(report.state, SolveState::Failed);
        assert_eq!(report.attempts(), 1);
        assert_eq!(report.rounds[0].remaining, 4);
    }

    #[test]
    #[should_panic(expected = "max_attempts must be at least 1")]
    fn zero_attempt_limit_is_rejected() {
        let (guesses, answers) = setup_words();
        let config = SolverConfig {
            max_attempts: 0,
            ..SolverConfig::default()
        };
        let _ = Solver::new(MinimaxStrategy, &guesses, &answers, config);
    }

    #[test]
    fn unknown_answer_is_rejected() {
        let (guesses, answers) = setup_words();
        let solver = Solver::new(
            MinimaxStrategy,
            &guesses,
            &answers,
            SolverConfig::default(),
        );

        let zebra = Word::new("zebra").unwrap();
        assert_eq!(solver.solve(&zebra), Err(SolveError::UnknownAnswer(zebra)));
    }

    #[test]
    fn session_steps_through_states() {
        let (guesses, answers) = setup_words();
        let solver = Solver::new(
            MinimaxStrategy,
            &guesses,
            &answers,
            SolverConfig::default(),
        );
        let answer = Word::new("grate").unwrap();
        let mut session = solver.session(answer).unwrap();

        assert_eq!(session.status(), SolveState::Guessing);
        assert_eq!(session.pending_guess(), Some(DEFAULT_OPENING));
        assert_eq!(session.candidates().len(), answers.len());

        assert_eq!(session.advance().unwrap(), SolveState::Guessing);
        assert_eq!(session.candidates().len(), 4);
        assert!(session.constraints().is_consistent_with(&answer));

        while session.advance().unwrap() == SolveState::Guessing {}
        assert_eq!(session.status(), SolveState::Solved);
        assert_eq!(session.candidates(), &[answer]);
        assert_eq!(session.pending_guess(), None);

        // Finished sessions stay put
        let rounds = session.rounds().len();
        assert_eq!(session.advance().unwrap(), SolveState::Solved);
        assert_eq!(session.rounds().len(), rounds);
    }

    #[test]
    fn hard_mode_guesses_respect_confirmed_letters() {
        let (guesses, answers) = setup_words();
        let config = SolverConfig {
            hard_mode: true,
            ..SolverConfig::default()
        };
        let solver = Solver::new(MinimaxStrategy, &guesses, &answers, config);

        for answer in &answers {
            let report = solver.solve(answer).unwrap();
            assert!(report.is_solved());

            let mut state = ConstraintState::new();
            for round in &report.rounds {
                assert!(state.allows_hard_mode_guess(&round.guess), "{answer}");
                state = state.combine(&ConstraintState::from_clues(&round.guess, &round.clues));
            }
        }
    }

    #[test]
    fn custom_opening_is_played_first() {
        let (guesses, answers) = setup_words();
        let config = SolverConfig {
            opening: Word::new("magic").unwrap(),
            ..SolverConfig::default()
        };
        let solver = Solver::new(EntropyStrategy, &guesses, &answers, config);

        let report = solver.solve(&Word::new("taper").unwrap()).unwrap();
        assert_eq!(report.rounds[0].guess.text(), "magic");
        assert!(report.is_solved());
    }
}

//! Wordle Solver
//!
//! Tracks letter constraints across rounds and picks each next guess with
//! either a letter-weight entropy heuristic or an exhaustive minimax search.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::core::{ClueVector, ConstraintState, Word};
//!
//! let answer = Word::new("taper").unwrap();
//! let guess = Word::new("aloes").unwrap();
//!
//! // Clues shown for the guess
//! let clues = ClueVector::compute(&answer, &guess);
//! assert_eq!(clues.to_string(), "Y--G-");
//!
//! // What the guess taught us
//! let state = ConstraintState::compute_delta(&answer, &guess);
//! assert!(state.is_consistent_with(&answer));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Offline entropy analysis
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

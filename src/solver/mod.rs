//! Wordle solving algorithms
//!
//! This module contains the solve loop and the two guess selection strategies.

mod engine;
pub mod entropy;
pub mod minimax;
pub mod strategy;

pub use engine::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OPENING, Round, Session, SolveError, SolveReport, SolveState,
    Solver, SolverConfig,
};
pub use strategy::{EntropyStrategy, MinimaxStrategy, Strategy, StrategyType};

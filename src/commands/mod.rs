//! Command implementations

pub mod analyze;
pub mod batch;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisReport, analyze};
pub use batch::{BatchStatistics, Histogram, run_batch};
pub use play::{PlayConfig, PlayOutcome, play, random_answer};
pub use solve::{SolveTranscript, TranscriptStep, solve_verbose};

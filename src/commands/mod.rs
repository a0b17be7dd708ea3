//! Command implementations

pub mod analyze;
pub mod filter;
pub mod rank;
pub mod solve;

pub use analyze::{AnalysisResult, FeedbackGroup, analyze_pokemon};
pub use filter::{FilterResult, parse_observation, run_filter};
pub use rank::{RankResult, run_rank};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_pokemon};

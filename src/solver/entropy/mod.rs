//! Entropy-based Pokémon scoring
//!
//! Implements Shannon entropy with best-response lookahead over feedback
//! partitions. This is the foundation of information-theoretic guessing.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, Lookahead, SearchError, calculate_entropy, calculate_metrics};
pub use selector::{score_pool, score_pool_with, select_best_guess};

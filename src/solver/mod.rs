//! Pokémon guess-ranking algorithms
//!
//! Partitioning, recursive entropy search and ranking of the results.

pub mod entropy;
pub mod partition;
pub mod ranking;

pub use entropy::{Lookahead, SearchError};
pub use ranking::{EntropyResult, rank};

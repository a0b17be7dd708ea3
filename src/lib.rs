//! Pokédex Entropy
//!
//! Ranks Pokémon guesses by expected information gain, with optional
//! best-response lookahead over several guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use pokedex_entropy::core::{FeedbackSpace, Pokemon};
//! use pokedex_entropy::solver::entropy::{Lookahead, calculate_entropy};
//!
//! // The outcome space is built once and shared
//! let space = FeedbackSpace::new();
//!
//! let pool = vec![
//!     Pokemon::new("Charmander", 1, "fire", "none", 6, 85).unwrap(),
//!     Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap(),
//!     Pokemon::new("Bulbasaur", 1, "grass", "poison", 7, 69).unwrap(),
//! ];
//! let refs: Vec<&Pokemon> = pool.iter().collect();
//!
//! let bits = calculate_entropy(&space, &pool[0], &refs, Lookahead::SINGLE).unwrap();
//! println!("Charmander: {bits:.3} bits");
//! ```

// Core domain types
pub mod core;

// Partitioning, entropy search and ranking
pub mod solver;

// Pokédex loading
pub mod pokedex;

// Command implementations
pub mod commands;

// Terminal and file output
pub mod output;

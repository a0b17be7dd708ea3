//! Core domain types for Pokémon guessing
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod pokemon;
mod space;

pub use feedback::{Feedback, FeedbackParseError, NumericOp, SlotOp};
pub use pokemon::{Pokemon, PokemonError};
pub use space::{FEEDBACK_COUNT, FeedbackSpace};

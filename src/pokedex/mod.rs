//! Pokédex loading
//!
//! The universe of Pokémon is read from a JSON file at startup and never
//! modified afterwards.

mod index;
pub mod loader;

pub use index::NameIndex;
pub use loader::{NO_SECONDARY_TYPE, PokedexError, from_json_str, load_from_file, sample};

//! Pokédex loading utilities
//!
//! The file format is a JSON object mapping each name to
//! `[gen, type1, type2, height_m, weight_kg]`:
//!
//! ```json
//! { "Charmander": [1, "Fire", "None", 0.6, 8.5] }
//! ```
//!
//! Entries are returned sorted by name so every run sees the same order.

use crate::core::{Pokemon, PokemonError};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Type used for a blank secondary type
pub const NO_SECONDARY_TYPE: &str = "none";

#[derive(Debug, Deserialize)]
struct RawEntry(f64, String, String, f64, f64);

/// Error type for Pokédex loading
#[derive(Debug)]
pub enum PokedexError {
    Io(io::Error),
    Json(serde_json::Error),
    Entry { name: String, source: PokemonError },
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read Pokédex: {e}"),
            Self::Json(e) => write!(f, "Malformed Pokédex JSON: {e}"),
            Self::Entry { name, source } => write!(f, "Invalid entry '{name}': {source}"),
        }
    }
}

impl std::error::Error for PokedexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Entry { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for PokedexError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Load a Pokédex from a JSON file
///
/// # Errors
///
/// Returns `PokedexError` if the file cannot be read, is not valid JSON of
/// the expected shape, or contains an invalid entry.
///
/// # Examples
/// ```no_run
/// use pokedex_entropy::pokedex::load_from_file;
///
/// let universe = load_from_file("pokedex.json").unwrap();
/// println!("Loaded {} Pokémon", universe.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Pokemon>, PokedexError> {
    let path = path.as_ref();
    debug!("Reading Pokédex from {}", path.display());
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Parse a Pokédex from JSON text
///
/// A blank secondary type is read as [`NO_SECONDARY_TYPE`].
///
/// # Errors
///
/// Returns `PokedexError::Json` for malformed input and
/// `PokedexError::Entry` for entries that fail validation.
///
/// # Examples
/// ```
/// use pokedex_entropy::pokedex::from_json_str;
///
/// let universe = from_json_str(r#"{
///     "Squirtle": [1, "Water", "", 0.5, 9.0],
///     "Bulbasaur": [1, "Grass", "Poison", 0.7, 6.9]
/// }"#).unwrap();
///
/// assert_eq!(universe[0].name(), "Bulbasaur");
/// assert_eq!(universe[1].type2(), "none");
/// assert_eq!(universe[1].weight(), 90);
/// ```
pub fn from_json_str(json: &str) -> Result<Vec<Pokemon>, PokedexError> {
    let raw: BTreeMap<String, RawEntry> = serde_json::from_str(json)?;

    let universe = raw
        .into_iter()
        .map(|(name, RawEntry(generation, type1, type2, height, weight))| {
            let type2 = if type2.trim().is_empty() {
                NO_SECONDARY_TYPE
            } else {
                type2.as_str()
            };
            Pokemon::from_measurements(name.as_str(), generation, &type1, type2, height, weight)
                .map_err(|source| PokedexError::Entry { name, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} Pokémon", universe.len());
    Ok(universe)
}

/// Pick `count` Pokémon at random, deterministically for a given seed
///
/// The selection keeps the universe's order. Returns the whole universe when
/// `count` is not smaller than it.
///
/// # Examples
/// ```
/// use pokedex_entropy::core::Pokemon;
/// use pokedex_entropy::pokedex::sample;
///
/// let universe: Vec<Pokemon> = (0..10)
///     .map(|i| Pokemon::new(format!("mon{i}"), 1, "normal", "none", i, i).unwrap())
///     .collect();
///
/// let picked = sample(&universe, 3, 42);
/// assert_eq!(picked.len(), 3);
/// assert_eq!(picked, sample(&universe, 3, 42));
/// ```
#[must_use]
pub fn sample(universe: &[Pokemon], count: usize, seed: u64) -> Vec<&Pokemon> {
    if count >= universe.len() {
        return universe.iter().collect();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, universe.len(), count).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| &universe[i]).collect()
}

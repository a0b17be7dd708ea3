//! Pokémon representation
//!
//! A Pokémon is described by the five attributes the game gives feedback on:
//! generation, two type slots, height and weight. Height and weight are stored
//! as integers scaled by 10 so comparisons never touch floating point.

use std::fmt;

/// A single Pokémon in the universe
///
/// Immutable once constructed. The search only ever borrows these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    name: String,
    generation: i32,
    type1: String,
    type2: String,
    height: i32,
    weight: i32,
}

/// Error type for invalid Pokémon attributes
#[derive(Debug, Clone, PartialEq)]
pub enum PokemonError {
    EmptyName,
    EmptyType { slot: u8 },
    NonFinite { field: &'static str, value: f64 },
}

impl fmt::Display for PokemonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Pokémon name must not be empty"),
            Self::EmptyType { slot } => write!(f, "Type {slot} must not be empty"),
            Self::NonFinite { field, value } => {
                write!(f, "Field '{field}' must be a finite number, got {value}")
            }
        }
    }
}

impl std::error::Error for PokemonError {}

impl Pokemon {
    /// Create a Pokémon from already-scaled attributes
    ///
    /// `height` and `weight` are the real measurements multiplied by 10.
    /// Names are trimmed; type names are trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `PokemonError` if the name or either type is empty.
    ///
    /// # Examples
    /// ```
    /// use pokedex_entropy::core::Pokemon;
    ///
    /// let charmander = Pokemon::new("Charmander", 1, "Fire", "none", 6, 85).unwrap();
    /// assert_eq!(charmander.type1(), "fire");
    /// assert_eq!(charmander.height(), 6);
    ///
    /// assert!(Pokemon::new("  ", 1, "fire", "none", 6, 85).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        generation: i32,
        type1: &str,
        type2: &str,
        height: i32,
        weight: i32,
    ) -> Result<Self, PokemonError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PokemonError::EmptyName);
        }

        Ok(Self {
            name,
            generation,
            type1: normalize_type(type1, 1)?,
            type2: normalize_type(type2, 2)?,
            height,
            weight,
        })
    }

    /// Create a Pokémon from raw measurements (metres and kilograms)
    ///
    /// Generation is rounded to the nearest integer; height and weight are
    /// multiplied by 10 and rounded.
    ///
    /// # Errors
    /// Returns `PokemonError` for empty names/types or non-finite numbers.
    ///
    /// # Examples
    /// ```
    /// use pokedex_entropy::core::Pokemon;
    ///
    /// let bulbasaur = Pokemon::from_measurements("Bulbasaur", 1.0, "grass", "poison", 0.7, 6.9).unwrap();
    /// assert_eq!(bulbasaur.height(), 7);
    /// assert_eq!(bulbasaur.weight(), 69);
    /// ```
    pub fn from_measurements(
        name: impl Into<String>,
        generation: f64,
        type1: &str,
        type2: &str,
        height_m: f64,
        weight_kg: f64,
    ) -> Result<Self, PokemonError> {
        let generation = finite("gen", generation)?.round() as i32;
        let height = (finite("height", height_m)? * 10.0).round() as i32;
        let weight = (finite("weight", weight_kg)? * 10.0).round() as i32;
        Self::new(name, generation, type1, type2, height, weight)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn generation(&self) -> i32 {
        self.generation
    }

    #[inline]
    #[must_use]
    pub fn type1(&self) -> &str {
        &self.type1
    }

    #[inline]
    #[must_use]
    pub fn type2(&self) -> &str {
        &self.type2
    }

    /// Height in decimetres (metres × 10)
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Weight in hectograms (kilograms × 10)
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    /// True if every attribute the game compares is identical
    ///
    /// Names are ignored: two forms with identical stats are indistinguishable.
    #[must_use]
    pub fn same_attributes(&self, other: &Self) -> bool {
        self.generation == other.generation
            && self.type1 == other.type1
            && self.type2 == other.type2
            && self.height == other.height
            && self.weight == other.weight
    }
}

fn normalize_type(raw: &str, slot: u8) -> Result<String, PokemonError> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(PokemonError::EmptyType { slot });
    }
    Ok(normalized)
}

fn finite(field: &'static str, value: f64) -> Result<f64, PokemonError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PokemonError::NonFinite { field, value })
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! Case-insensitive name lookup

use crate::core::Pokemon;
use rustc_hash::FxHashMap;

/// Lookup of Pokémon by name, ignoring case and surrounding whitespace
#[derive(Debug, Clone, Default)]
pub struct NameIndex<'a> {
    by_name: FxHashMap<String, &'a Pokemon>,
}

impl<'a> NameIndex<'a> {
    /// Index every Pokémon in `pool`
    ///
    /// If two entries share a name, the first one wins.
    #[must_use]
    pub fn new(pool: &[&'a Pokemon]) -> Self {
        let mut by_name = FxHashMap::default();
        for &pokemon in pool {
            by_name.entry(normalize(pokemon.name())).or_insert(pokemon);
        }
        Self { by_name }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Pokemon> {
        self.by_name.get(&normalize(name)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

//! Ordering scored guesses
//!
//! Entropies closer than `TIE_EPSILON` are considered equal and keep their
//! input order. No secondary key is applied.

use std::cmp::Ordering;

/// Entropies closer than this are ties
pub const TIE_EPSILON: f64 = 1e-9;

/// Expected information for one guess
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyResult {
    pub name: String,
    pub entropy: f64,
}

impl EntropyResult {
    #[must_use]
    pub fn new(name: impl Into<String>, entropy: f64) -> Self {
        Self {
            name: name.into(),
            entropy,
        }
    }

    /// Expected candidates left out of `universe_size` after this guess
    ///
    /// # Examples
    /// ```
    /// use pokedex_entropy::solver::EntropyResult;
    ///
    /// let result = EntropyResult::new("Charmander", 2.0);
    /// assert!((result.expected_remaining(100) - 25.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn expected_remaining(&self, universe_size: usize) -> f64 {
        universe_size as f64 * (-self.entropy).exp2()
    }
}

/// Compare two entropies for a descending ranking
///
/// Returns `Equal` when they differ by less than `TIE_EPSILON`. This is not a
/// total order (ties are not transitive), so it must not be handed to
/// `slice::sort_by`.
#[must_use]
pub fn compare_entropy(a: f64, b: f64) -> Ordering {
    let diff = a - b;
    if diff.abs() < TIE_EPSILON {
        Ordering::Equal
    } else if diff > 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Sort results by descending entropy, keeping input order among ties
///
/// # Examples
/// ```
/// use pokedex_entropy::solver::{EntropyResult, rank};
///
/// let mut results = vec![
///     EntropyResult::new("Pidgey", 0.3),
///     EntropyResult::new("Eevee", 0.5),
///     EntropyResult::new("Ditto", 0.500_000_000_05),
/// ];
/// rank(&mut results);
///
/// let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["Eevee", "Ditto", "Pidgey"]);
/// ```
pub fn rank(results: &mut [EntropyResult]) {
    rank_by(results, |result| result.entropy);
}

/// Stable descending sort by an entropy key with epsilon ties
///
/// Insertion sort: quadratic, but never relies on the comparison being
/// transitive and never reorders tied neighbours.
pub fn rank_by<T>(items: &mut [T], entropy: impl Fn(&T) -> f64) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0
            && compare_entropy(entropy(&items[j - 1]), entropy(&items[j])) == Ordering::Greater
        {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

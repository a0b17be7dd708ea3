//! Shannon entropy with recursive lookahead
//!
//! Given a guess, a candidate pool and a lookahead depth, computes the
//! expected information gain in bits.
//!
//! # Cost
//! Depth 1 partitions the pool once. Every extra level re-scores each
//! surviving candidate against its own group, so the work grows roughly as
//! `N^depth`. With a full Pokédex (~1200 entries) depth 2 is already hours of
//! CPU; depth is always an explicit argument, never a hidden default.

use crate::core::{FeedbackSpace, Pokemon};
use crate::solver::partition::partition;
use rayon::prelude::*;
use std::fmt;
use std::num::NonZeroUsize;

/// Number of guesses simulated when scoring: this guess plus `depth - 1`
/// best-response follow-ups
///
/// There is no default depth; pick one explicitly:
///
/// ```compile_fail
/// use pokedex_entropy::solver::Lookahead;
///
/// let _ = Lookahead::default();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lookahead(NonZeroUsize);

impl Lookahead {
    /// Score the guess on its own
    pub const SINGLE: Self = Self(NonZeroUsize::MIN);

    /// Create a lookahead of `depth` guesses
    ///
    /// # Errors
    /// Returns `SearchError::ZeroLookahead` if `depth` is 0.
    pub fn new(depth: usize) -> Result<Self, SearchError> {
        NonZeroUsize::new(depth)
            .map(Self)
            .ok_or(SearchError::ZeroLookahead)
    }

    #[inline]
    #[must_use]
    pub const fn depth(self) -> usize {
        self.0.get()
    }

    /// The lookahead left after one guess, if any
    #[inline]
    #[must_use]
    pub fn remaining(self) -> Option<Self> {
        NonZeroUsize::new(self.0.get() - 1).map(Self)
    }
}

impl fmt::Display for Lookahead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Precondition violations for an entropy search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    EmptyPool,
    ZeroLookahead,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Cannot score a guess against an empty candidate pool"),
            Self::ZeroLookahead => write!(f, "Lookahead depth must be at least 1"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Comprehensive one-guess metrics
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback outcomes the guess can produce
    pub outcomes: usize,
    /// Candidates identical to the guess (the game would be won)
    pub identical: usize,
}

/// Calculate the expected information from `guess` over `pool`
///
/// For each feedback group of probability `p` this adds `-p * log2(p)`. If
/// lookahead remains, it also adds `p` times the best score any member of that
/// group achieves as the next guess against the group itself. Follow-up
/// guesses are only ever drawn from the surviving group.
///
/// Pool members identical to the guess count toward the pool size but belong
/// to no group.
///
/// # Errors
/// Returns `SearchError::EmptyPool` if `pool` is empty.
///
/// # Examples
/// ```
/// use pokedex_entropy::core::{FeedbackSpace, Pokemon};
/// use pokedex_entropy::solver::entropy::{Lookahead, calculate_entropy};
///
/// let space = FeedbackSpace::new();
/// let guess = Pokemon::new("Pikachu", 1, "electric", "none", 4, 60).unwrap();
/// let pool = vec![
///     Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap(),
///     Pokemon::new("Pidgey", 1, "normal", "flying", 3, 18).unwrap(),
/// ];
/// let refs: Vec<&Pokemon> = pool.iter().collect();
///
/// let bits = calculate_entropy(&space, &guess, &refs, Lookahead::SINGLE).unwrap();
/// assert!((bits - 1.0).abs() < 1e-12); // log2(2)
/// ```
pub fn calculate_entropy(
    space: &FeedbackSpace,
    guess: &Pokemon,
    pool: &[&Pokemon],
    lookahead: Lookahead,
) -> Result<f64, SearchError> {
    if pool.is_empty() {
        return Err(SearchError::EmptyPool);
    }
    Ok(search(space, guess, pool, lookahead))
}

/// Recursive search over a non-empty pool
fn search(space: &FeedbackSpace, guess: &Pokemon, pool: &[&Pokemon], lookahead: Lookahead) -> f64 {
    let total = pool.len() as f64;
    let next = lookahead.remaining();

    // Summed in FeedbackSpace order so the result is reproducible bit for bit
    partition(space, guess, pool)
        .groups()
        .map(|(_, group)| {
            let p = group.len() as f64 / total;
            let mut bits = -p * p.log2();
            if let Some(next) = next {
                bits += p * best_follow_up(space, group, next);
            }
            bits
        })
        .sum()
}

/// Best score any member of `group` achieves as the next guess against `group`
///
/// Every score is non-negative, so the maximum does not depend on the order
/// the members are visited in.
fn best_follow_up(space: &FeedbackSpace, group: &[&Pokemon], lookahead: Lookahead) -> f64 {
    group
        .par_iter()
        .map(|&candidate| search(space, candidate, group, lookahead))
        .reduce(|| 0.0, f64::max)
}

/// Calculate single-guess metrics
///
/// Returns entropy, expected remaining candidates and max partition size.
///
/// # Errors
/// Returns `SearchError::EmptyPool` if `pool` is empty.
pub fn calculate_metrics(
    space: &FeedbackSpace,
    guess: &Pokemon,
    pool: &[&Pokemon],
) -> Result<GuessMetrics, SearchError> {
    if pool.is_empty() {
        return Err(SearchError::EmptyPool);
    }

    let groups = partition(space, guess, pool);
    let total = pool.len() as f64;

    let (entropy, expected_remaining) =
        groups
            .groups()
            .fold((0.0, 0.0), |(entropy, expected), (_, group)| {
                let p = group.len() as f64 / total;
                (entropy - p * p.log2(), expected + p * group.len() as f64)
            });

    Ok(GuessMetrics {
        entropy,
        expected_remaining,
        max_partition: groups.largest(),
        outcomes: groups.non_empty(),
        identical: groups.excluded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    const EPSILON: f64 = 1e-9;

    fn mon(
        name: &str,
        generation: i32,
        type1: &str,
        type2: &str,
        height: i32,
        weight: i32,
    ) -> Pokemon {
        Pokemon::new(name, generation, type1, type2, height, weight).unwrap()
    }

    fn depth(n: usize) -> Lookahead {
        Lookahead::new(n).unwrap()
    }

    fn starters() -> Vec<Pokemon> {
        vec![
            mon("Bulbasaur", 1, "grass", "poison", 7, 69),
            mon("Charmander", 1, "fire", "none", 6, 85),
            mon("Squirtle", 1, "water", "none", 5, 90),
            mon("Chikorita", 2, "grass", "none", 9, 64),
            mon("Cyndaquil", 2, "fire", "none", 5, 79),
            mon("Totodile", 2, "water", "none", 6, 95),
            mon("Treecko", 3, "grass", "none", 5, 50),
            mon("Torchic", 3, "fire", "none", 4, 25),
            mon("Mudkip", 3, "water", "none", 4, 76),
        ]
    }

    #[test]
    fn golden_two_starters() {
        let space = FeedbackSpace::new();
        let charmander = mon("Charmander", 1, "fire", "none", 6, 85);
        let squirtle = mon("Squirtle", 1, "water", "none", 5, 90);

        // Squirtle alone: one group with p = 1
        let only_squirtle = vec![&squirtle];
        let bits = calculate_entropy(&space, &charmander, &only_squirtle, depth(1)).unwrap();
        assert!(bits.abs() < EPSILON);

        // Charmander's own outcome is the omitted all-exact one, so the
        // single group {Squirtle} has p = 1/2
        let both = vec![&charmander, &squirtle];
        let bits = calculate_entropy(&space, &charmander, &both, depth(1)).unwrap();
        assert!((bits - 0.5).abs() < EPSILON);
    }

    #[test]
    fn fully_discriminating_guess_reaches_log2_n() {
        let space = FeedbackSpace::new();
        let guess = mon("Pikachu", 1, "electric", "none", 4, 60);
        let pool = vec![
            mon("Bulbasaur", 1, "grass", "poison", 7, 69),
            mon("Geodude", 1, "rock", "ground", 4, 200),
            mon("Caterpie", 1, "bug", "none", 3, 29),
            mon("Voltorb", 1, "electric", "none", 5, 104),
            mon("Hoothoot", 2, "normal", "flying", 7, 212),
        ];
        let refs: Vec<&Pokemon> = pool.iter().collect();

        let groups = partition(&space, &guess, &refs);
        assert_eq!(groups.non_empty(), pool.len());

        let bits = calculate_entropy(&space, &guess, &refs, depth(1)).unwrap();
        assert!((bits - (pool.len() as f64).log2()).abs() < EPSILON);
    }

    #[test]
    fn indistinguishable_pool_has_zero_entropy() {
        let space = FeedbackSpace::new();
        let guess = mon("Mew", 1, "psychic", "none", 4, 40);
        // All taller, heavier, later, and share no type with the guess
        let pool = vec![
            mon("Lugia", 2, "flying", "water", 52, 2160),
            mon("Ho-Oh", 2, "fire", "grass", 38, 1990),
            mon("Groudon", 3, "ground", "rock", 35, 9500),
        ];
        let refs: Vec<&Pokemon> = pool.iter().collect();

        let bits = calculate_entropy(&space, &guess, &refs, depth(1)).unwrap();
        assert!(bits.abs() < EPSILON);
    }

    #[test]
    fn entropy_is_bounded_by_pool_size() {
        let space = FeedbackSpace::new();
        let pool = starters();
        let refs: Vec<&Pokemon> = pool.iter().collect();
        let bound = (pool.len() as f64).log2();

        for guess in &pool {
            for d in 1..=3 {
                let bits = calculate_entropy(&space, guess, &refs, depth(d)).unwrap();
                assert!(bits >= 0.0);
                assert!(bits <= bound + EPSILON, "{guess} depth {d}: {bits}");
            }
        }
    }

    #[test]
    fn more_lookahead_never_decreases_entropy() {
        let space = FeedbackSpace::new();
        let pool = starters();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        for guess in &pool {
            let mut previous = 0.0;
            for d in 1..=3 {
                let bits = calculate_entropy(&space, guess, &refs, depth(d)).unwrap();
                assert!(bits + EPSILON >= previous, "{guess} depth {d}");
                previous = bits;
            }
        }
    }

    #[test]
    fn second_level_adds_best_follow_up() {
        let space = FeedbackSpace::new();
        let guess = mon("Charmander", 1, "fire", "none", 6, 85);
        // Both land in one group: later gen, non-fire, "none" in slot 2
        let a = mon("Totodile", 2, "water", "none", 6, 95);
        let b = mon("Chikorita", 2, "grass", "none", 6, 95);
        let pool = vec![&a, &b];

        let one = calculate_entropy(&space, &guess, &pool, depth(1)).unwrap();
        assert!(one.abs() < EPSILON);

        // Guessing either one next always separates the other: 1/2 bit
        let two = calculate_entropy(&space, &guess, &pool, depth(2)).unwrap();
        assert!((two - 0.5).abs() < EPSILON);
    }

    #[test]
    fn pool_order_does_not_change_entropy() {
        let space = FeedbackSpace::new();
        let pool = starters();
        let mut refs: Vec<&Pokemon> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        let expected: Vec<f64> = pool
            .iter()
            .map(|guess| calculate_entropy(&space, guess, &refs, depth(2)).unwrap())
            .collect();

        for _ in 0..5 {
            refs.shuffle(&mut rng);
            for (guess, &want) in pool.iter().zip(&expected) {
                let got = calculate_entropy(&space, guess, &refs, depth(2)).unwrap();
                assert!((got - want).abs() < EPSILON, "{guess}: {got} vs {want}");
            }
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        let space = FeedbackSpace::new();
        let guess = mon("Eevee", 1, "normal", "none", 3, 65);

        assert_eq!(
            calculate_entropy(&space, &guess, &[], depth(1)),
            Err(SearchError::EmptyPool)
        );
        assert!(matches!(
            calculate_metrics(&space, &guess, &[]),
            Err(SearchError::EmptyPool)
        ));
    }

    #[test]
    fn zero_lookahead_is_rejected() {
        assert_eq!(Lookahead::new(0), Err(SearchError::ZeroLookahead));
        assert_eq!(Lookahead::new(3).unwrap().depth(), 3);
        assert_eq!(Lookahead::SINGLE.remaining(), None);
        assert_eq!(depth(2).remaining(), Some(Lookahead::SINGLE));
        assert_eq!(Lookahead::SINGLE.depth(), 1);
    }

    #[test]
    fn metrics_match_single_step_entropy() {
        let space = FeedbackSpace::new();
        let pool = starters();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        for guess in &pool {
            let metrics = calculate_metrics(&space, guess, &refs).unwrap();
            let bits = calculate_entropy(&space, guess, &refs, depth(1)).unwrap();

            assert!((metrics.entropy - bits).abs() < EPSILON);
            assert_eq!(metrics.identical, 1);
            assert!(metrics.max_partition <= pool.len());
            assert!(metrics.expected_remaining <= metrics.max_partition as f64 + EPSILON);
            assert!(metrics.outcomes >= 1);
        }
    }
}

//! Scoring many guesses at once
//!
//! Guesses are scored in parallel; results come back in input order so the
//! ranking's tie policy sees a deterministic sequence.

use super::calculator::{Lookahead, SearchError, calculate_entropy};
use crate::core::{FeedbackSpace, Pokemon};
use crate::solver::ranking::{EntropyResult, rank_by};
use rayon::prelude::*;

/// Score every guess against `pool`
///
/// # Errors
/// Returns `SearchError::EmptyPool` if `pool` is empty.
pub fn score_pool(
    space: &FeedbackSpace,
    guesses: &[&Pokemon],
    pool: &[&Pokemon],
    lookahead: Lookahead,
) -> Result<Vec<EntropyResult>, SearchError> {
    score_pool_with(space, guesses, pool, lookahead, |_| {})
}

/// Score every guess against `pool`, calling `on_scored` as each one finishes
///
/// `on_scored` runs on worker threads in completion order; the returned
/// vector is still in input order.
///
/// # Errors
/// Returns `SearchError::EmptyPool` if `pool` is empty.
pub fn score_pool_with<F>(
    space: &FeedbackSpace,
    guesses: &[&Pokemon],
    pool: &[&Pokemon],
    lookahead: Lookahead,
    on_scored: F,
) -> Result<Vec<EntropyResult>, SearchError>
where
    F: Fn(&EntropyResult) + Sync,
{
    if pool.is_empty() {
        return Err(SearchError::EmptyPool);
    }

    guesses
        .par_iter()
        .map(|&guess| {
            let entropy = calculate_entropy(space, guess, pool, lookahead)?;
            let result = EntropyResult::new(guess.name(), entropy);
            on_scored(&result);
            Ok(result)
        })
        .collect()
}

/// Select the best guess by ranked entropy
///
/// Returns the guess and its score, or `None` if `guesses` is empty. Ties go
/// to the earliest guess.
///
/// # Errors
/// Returns `SearchError::EmptyPool` if `pool` is empty.
///
/// # Examples
/// ```
/// use pokedex_entropy::core::{FeedbackSpace, Pokemon};
/// use pokedex_entropy::solver::entropy::{Lookahead, select_best_guess};
///
/// let space = FeedbackSpace::new();
/// let pool = vec![
///     Pokemon::new("Charmander", 1, "fire", "none", 6, 85).unwrap(),
///     Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap(),
///     Pokemon::new("Bulbasaur", 1, "grass", "poison", 7, 69).unwrap(),
/// ];
/// let refs: Vec<&Pokemon> = pool.iter().collect();
///
/// let (best, bits) = select_best_guess(&space, &refs, &refs, Lookahead::SINGLE)
///     .unwrap()
///     .unwrap();
/// assert!(bits > 0.0);
/// assert!(refs.contains(&best));
/// ```
pub fn select_best_guess<'a>(
    space: &FeedbackSpace,
    guesses: &[&'a Pokemon],
    pool: &[&Pokemon],
    lookahead: Lookahead,
) -> Result<Option<(&'a Pokemon, f64)>, SearchError> {
    if pool.is_empty() {
        return Err(SearchError::EmptyPool);
    }

    let mut scored: Vec<(&'a Pokemon, f64)> = guesses
        .par_iter()
        .map(|&guess| calculate_entropy(space, guess, pool, lookahead).map(|e| (guess, e)))
        .collect::<Result<_, _>>()?;

    rank_by(&mut scored, |&(_, entropy)| entropy);
    Ok(scored.into_iter().next())
}

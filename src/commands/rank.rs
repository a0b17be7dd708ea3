//! Rank command
//!
//! Scores every Pokémon in the pool against the pool itself and ranks them.

use crate::core::{FeedbackSpace, Pokemon};
use crate::solver::entropy::score_pool_with;
use crate::solver::{EntropyResult, Lookahead, SearchError, rank};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::{Duration, Instant};

/// Result of a ranking run
#[derive(Debug)]
pub struct RankResult {
    pub results: Vec<EntropyResult>,
    pub pool_size: usize,
    pub lookahead: Lookahead,
    pub duration: Duration,
}

/// Score and rank every member of `pool` as a guess against `pool`
///
/// # Errors
///
/// Returns `SearchError::EmptyPool` if `pool` is empty.
pub fn run_rank(
    space: &FeedbackSpace,
    pool: &[&Pokemon],
    lookahead: Lookahead,
    show_progress: bool,
) -> Result<RankResult, SearchError> {
    info!(
        "Scoring {} Pokémon with lookahead {lookahead}",
        pool.len()
    );
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(pool.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | ETA {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = score_pool_with(space, pool, pool, lookahead, |_| pb.inc(1))?;
    pb.finish_and_clear();

    rank(&mut results);

    let duration = start.elapsed();
    info!("Entropy calculation took {:.2?}", duration);

    Ok(RankResult {
        results,
        pool_size: pool.len(),
        lookahead,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Pokemon> {
        vec![
            Pokemon::new("Bulbasaur", 1, "grass", "poison", 7, 69).unwrap(),
            Pokemon::new("Charmander", 1, "fire", "none", 6, 85).unwrap(),
            Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap(),
            Pokemon::new("Chikorita", 2, "grass", "none", 9, 64).unwrap(),
            Pokemon::new("Cyndaquil", 2, "fire", "none", 5, 79).unwrap(),
            Pokemon::new("Totodile", 2, "water", "none", 6, 95).unwrap(),
        ]
    }

    #[test]
    fn ranks_every_member() {
        let space = FeedbackSpace::new();
        let pool = pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        let result = run_rank(&space, &refs, Lookahead::SINGLE, false).unwrap();

        assert_eq!(result.results.len(), pool.len());
        assert_eq!(result.pool_size, pool.len());
        assert!(
            result
                .results
                .windows(2)
                .all(|w| w[0].entropy + 1e-9 >= w[1].entropy)
        );
    }

    #[test]
    fn entropies_within_bounds() {
        let space = FeedbackSpace::new();
        let pool = pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();
        let bound = (pool.len() as f64).log2();

        let result = run_rank(&space, &refs, Lookahead::new(2).unwrap(), false).unwrap();
        for entry in &result.results {
            assert!(entry.entropy >= 0.0 && entry.entropy <= bound + 1e-9);
            let remaining = entry.expected_remaining(result.pool_size);
            assert!(remaining >= 1.0 - 1e-9 && remaining <= pool.len() as f64);
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let space = FeedbackSpace::new();
        assert!(matches!(
            run_rank(&space, &[], Lookahead::SINGLE, false),
            Err(SearchError::EmptyPool)
        ));
    }
}

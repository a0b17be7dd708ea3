//! Pokémon solving command
//!
//! Plays a game against a known target and returns the solution path.

use crate::core::{Feedback, FeedbackSpace, Pokemon};
use crate::pokedex::NameIndex;
use crate::solver::Lookahead;
use crate::solver::entropy::select_best_guess;
use crate::solver::partition::filter_candidates;
use anyhow::{Result, anyhow};
use log::debug;

/// Configuration for solving a target
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub lookahead: Lookahead,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 10,
            lookahead: Lookahead::SINGLE,
        }
    }
}

/// Result of solving a target
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub name: String,
    /// `None` when every attribute matched the target
    pub feedback: Option<Feedback>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
}

/// Solve `config.target` by always guessing the best-ranked remaining candidate
///
/// # Errors
///
/// Returns an error if the target is not in the pool.
pub fn solve_pokemon(
    space: &FeedbackSpace,
    pool: &[&Pokemon],
    config: &SolveConfig,
) -> Result<SolveResult> {
    let target = NameIndex::new(pool)
        .get(&config.target)
        .ok_or_else(|| anyhow!("Pokémon '{}' not in Pokédex", config.target))?;

    let mut candidates: Vec<&Pokemon> = pool.to_vec();
    let mut guesses = Vec::new();
    let mut success = false;

    while guesses.len() < config.max_guesses {
        let Some((guess, entropy)) =
            select_best_guess(space, &candidates, &candidates, config.lookahead)?
        else {
            break;
        };

        let candidates_before = candidates.len();
        let feedback = Feedback::observe(guess, target);

        if guess.name() == target.name() {
            guesses.push(GuessStep {
                name: guess.name().to_string(),
                feedback,
                candidates_before,
                candidates_after: 1,
                entropy,
            });
            success = true;
            break;
        }

        candidates = match feedback {
            Some(feedback) => filter_candidates(&candidates, &[(guess, feedback)]),
            // Same attributes, different name: only look-alikes remain
            None => candidates
                .iter()
                .copied()
                .filter(|c| c.same_attributes(guess))
                .collect(),
        };
        candidates.retain(|c| c.name() != guess.name());
        debug!(
            "Guessed {guess}: {candidates_before} -> {} candidates",
            candidates.len()
        );

        guesses.push(GuessStep {
            name: guess.name().to_string(),
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
            entropy,
        });
    }

    Ok(SolveResult {
        success,
        guesses,
        target: target.name().to_string(),
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
            Pokemon::new("Treecko", 3, "grass", "none", 5, 50).unwrap(),
            Pokemon::new("Torchic", 3, "fire", "none", 4, 25).unwrap(),
            Pokemon::new("Mudkip", 3, "water", "none", 4, 76).unwrap(),
        ]
    }

    #[test]
    fn solves_every_target() {
        let space = FeedbackSpace::new();
        let pool = pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        for target in &pool {
            let config = SolveConfig::new(target.name().to_string());
            let result = solve_pokemon(&space, &refs, &config).unwrap();

            assert!(result.success, "failed to solve {target}");
            assert_eq!(result.target, target.name());
            let last = result.guesses.last().unwrap();
            assert_eq!(last.name, target.name());
            assert_eq!(last.feedback, None);
        }
    }

    #[test]
    fn candidates_shrink_every_turn() {
        let space = FeedbackSpace::new();
        let pool = pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        let result = solve_pokemon(&space, &refs, &SolveConfig::new("Mudkip".into())).unwrap();
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn guess_limit_is_respected() {
        let space = FeedbackSpace::new();
        let pool = pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        let mut config = SolveConfig::new("Treecko".into());
        config.max_guesses = 1;
        let result = solve_pokemon(&space, &refs, &config).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn look_alike_is_told_apart() {
        let space = FeedbackSpace::new();
        let a = Pokemon::new("Pumpkaboo", 6, "ghost", "grass", 4, 50).unwrap();
        let b = Pokemon::new("Pumpkaboo-Small", 6, "ghost", "grass", 4, 50).unwrap();
        let refs = vec![&a, &b];

        let result = solve_pokemon(&space, &refs, &SolveConfig::new("Pumpkaboo-Small".into()))
            .unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.guesses[0].name, "Pumpkaboo");
    }

    #[test]
    fn unknown_target() {
        let space = FeedbackSpace::new();
        let pool = pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();
        assert!(solve_pokemon(&space, &refs, &SolveConfig::new("Agumon".into())).is_err());
    }
}

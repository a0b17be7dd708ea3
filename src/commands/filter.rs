//! Candidate filtering command
//!
//! Applies feedback already received in a game and suggests the next guess.

use crate::core::{Feedback, FeedbackSpace, Pokemon};
use crate::pokedex::NameIndex;
use crate::solver::entropy::score_pool;
use crate::solver::partition::filter_candidates;
use crate::solver::{EntropyResult, Lookahead, rank};
use anyhow::{Context, Result, anyhow};
use log::info;

/// Result of filtering a pool by observed feedback
#[derive(Debug)]
pub struct FilterResult<'a> {
    pub remaining: Vec<&'a Pokemon>,
    /// Remaining candidates ranked as the next guess
    pub suggestions: Vec<EntropyResult>,
}

/// Parse an observation of the form `Name:code`, e.g. `Charmander:=xo<>`
///
/// The name is split off at the last `:` so names containing a colon work.
///
/// # Errors
///
/// Returns an error if the separator is missing, the name is unknown or the
/// feedback code is invalid.
pub fn parse_observation<'a>(
    text: &str,
    index: &NameIndex<'a>,
) -> Result<(&'a Pokemon, Feedback)> {
    let (name, code) = text
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("Expected NAME:FEEDBACK, got '{text}'"))?;

    let guess = index
        .get(name)
        .ok_or_else(|| anyhow!("Pokémon '{name}' not in Pokédex"))?;
    let feedback = code
        .parse::<Feedback>()
        .with_context(|| format!("Invalid feedback for '{name}'"))?;

    Ok((guess, feedback))
}

/// Narrow `pool` by every observation and rank what is left
///
/// # Errors
///
/// Returns an error if any observation fails to parse.
pub fn run_filter<'a>(
    space: &FeedbackSpace,
    pool: &[&'a Pokemon],
    observations: &[String],
    lookahead: Lookahead,
) -> Result<FilterResult<'a>> {
    let index = NameIndex::new(pool);
    let history = observations
        .iter()
        .map(|text| parse_observation(text, &index))
        .collect::<Result<Vec<_>>>()?;

    let remaining = filter_candidates(pool, &history);
    info!(
        "{} of {} candidates remain after {} observation(s)",
        remaining.len(),
        pool.len(),
        history.len()
    );

    let suggestions = if remaining.is_empty() {
        Vec::new()
    } else {
        let mut scored = score_pool(space, &remaining, &remaining, lookahead)?;
        rank(&mut scored);
        scored
    };

    Ok(FilterResult {
        remaining,
        suggestions,
    })
}

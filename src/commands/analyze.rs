//! Pokémon analysis command
//!
//! Analyzes the entropy and feedback breakdown of a single guess.

use crate::core::{Feedback, FeedbackSpace, Pokemon};
use crate::pokedex::NameIndex;
use crate::solver::Lookahead;
use crate::solver::entropy::{GuessMetrics, calculate_entropy, calculate_metrics};
use crate::solver::partition::partition;
use anyhow::{Result, anyhow};

/// Candidates that would receive the same feedback
#[derive(Debug, Clone)]
pub struct FeedbackGroup {
    pub feedback: Feedback,
    pub members: Vec<String>,
}

/// Result of analyzing one guess against a pool
#[derive(Debug)]
pub struct AnalysisResult {
    pub name: String,
    pub lookahead: Lookahead,
    pub entropy: f64,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Non-empty feedback groups, largest first
    pub groups: Vec<FeedbackGroup>,
}

/// Analyze `name` as a guess against `pool`
///
/// # Errors
///
/// Returns an error if:
/// - The name is not in the pool
/// - The pool is empty
pub fn analyze_pokemon(
    space: &FeedbackSpace,
    name: &str,
    pool: &[&Pokemon],
    lookahead: Lookahead,
) -> Result<AnalysisResult> {
    let guess = NameIndex::new(pool)
        .get(name)
        .ok_or_else(|| anyhow!("Pokémon '{name}' not in Pokédex"))?;

    let metrics = calculate_metrics(space, guess, pool)?;
    let entropy = if lookahead == Lookahead::SINGLE {
        metrics.entropy
    } else {
        calculate_entropy(space, guess, pool, lookahead)?
    };

    let mut groups: Vec<FeedbackGroup> = partition(space, guess, pool)
        .groups()
        .map(|(feedback, members)| FeedbackGroup {
            feedback,
            members: members.iter().map(|p| p.name().to_string()).collect(),
        })
        .collect();
    groups.sort_by_key(|group| std::cmp::Reverse(group.members.len()));

    Ok(AnalysisResult {
        name: guess.name().to_string(),
        lookahead,
        entropy,
        metrics,
        total_candidates: pool.len(),
        groups,
    })
}

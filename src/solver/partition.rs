//! Splitting a candidate pool by the feedback a guess would produce
//!
//! A target lands in the group of every feedback whose five predicates hold
//! for it. Targets identical to the guess on all five attributes land in no
//! group (their outcome is the excluded all-exact combination).

use crate::core::{FEEDBACK_COUNT, Feedback, FeedbackSpace, NumericOp, Pokemon, SlotOp};

/// Candidate pool grouped by feedback, in `FeedbackSpace` order
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    space: &'a FeedbackSpace,
    groups: Vec<Vec<&'a Pokemon>>,
    excluded: usize,
}

impl<'a> Partition<'a> {
    /// Candidates consistent with `feedback` (possibly empty)
    #[must_use]
    pub fn group(&self, feedback: Feedback) -> &[&'a Pokemon] {
        &self.groups[feedback.index()]
    }

    /// Non-empty groups with their feedback, in `FeedbackSpace` order
    pub fn groups(&self) -> impl Iterator<Item = (Feedback, &[&'a Pokemon])> + '_ {
        self.space
            .iter()
            .zip(&self.groups)
            .filter(|(_, group)| !group.is_empty())
            .map(|(feedback, group)| (feedback, group.as_slice()))
    }

    /// Number of non-empty groups
    #[must_use]
    pub fn non_empty(&self) -> usize {
        self.groups.iter().filter(|group| !group.is_empty()).count()
    }

    /// Total size of all groups
    #[must_use]
    pub fn covered(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Pool members with the same attributes as the guess
    #[must_use]
    pub const fn excluded(&self) -> usize {
        self.excluded
    }

    /// Size of the largest group (worst-case remaining candidates)
    #[must_use]
    pub fn largest(&self) -> usize {
        self.groups.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Partition `pool` by the feedback `guess` would receive against each member
///
/// Equivalent to testing every feedback in `space` with [`Feedback::matches`],
/// but only visits the operations that actually hold for each member, so the
/// cost is linear in the pool size.
///
/// # Examples
/// ```
/// use pokedex_entropy::core::{FeedbackSpace, Pokemon};
/// use pokedex_entropy::solver::partition::partition;
///
/// let space = FeedbackSpace::new();
/// let charmander = Pokemon::new("Charmander", 1, "fire", "none", 6, 85).unwrap();
/// let squirtle = Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap();
/// let pool = vec![&charmander, &squirtle];
///
/// let groups = partition(&space, &charmander, &pool);
/// assert_eq!(groups.non_empty(), 1);
/// assert_eq!(groups.excluded(), 1);
/// ```
#[must_use]
pub fn partition<'a>(
    space: &'a FeedbackSpace,
    guess: &Pokemon,
    pool: &[&'a Pokemon],
) -> Partition<'a> {
    let mut groups: Vec<Vec<&'a Pokemon>> = vec![Vec::new(); FEEDBACK_COUNT];
    let mut excluded = 0;

    for &target in pool {
        let generation = NumericOp::observe(guess.generation(), target.generation());
        let height = NumericOp::observe(guess.height(), target.height());
        let weight = NumericOp::observe(guess.weight(), target.weight());

        // A slot can satisfy both Match and WrongSlot when the target repeats a type
        for type1 in holding_slot_ops(guess.type1(), target.type1(), target.type2()) {
            for type2 in holding_slot_ops(guess.type2(), target.type2(), target.type1()) {
                match Feedback::new(generation, type1, type2, height, weight) {
                    Some(feedback) => groups[feedback.index()].push(target),
                    None => excluded += 1,
                }
            }
        }
    }

    Partition {
        space,
        groups,
        excluded,
    }
}

fn holding_slot_ops<'s>(
    guess_type: &'s str,
    target_same: &'s str,
    target_other: &'s str,
) -> impl Iterator<Item = SlotOp> + 's {
    SlotOp::ALL
        .into_iter()
        .filter(move |op| op.holds(guess_type, target_same, target_other))
}

/// Narrow a pool to the members consistent with every observed feedback
///
/// # Examples
/// ```
/// use pokedex_entropy::core::{Feedback, Pokemon};
/// use pokedex_entropy::solver::partition::filter_candidates;
///
/// let charmander = Pokemon::new("Charmander", 1, "fire", "none", 6, 85).unwrap();
/// let squirtle = Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap();
/// let bulbasaur = Pokemon::new("Bulbasaur", 1, "grass", "poison", 7, 69).unwrap();
/// let pool = vec![&charmander, &squirtle, &bulbasaur];
///
/// let feedback: Feedback = "=xo<>".parse().unwrap();
/// let remaining = filter_candidates(&pool, &[(&charmander, feedback)]);
/// assert_eq!(remaining, vec![&squirtle]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    pool: &[&'a Pokemon],
    history: &[(&Pokemon, Feedback)],
) -> Vec<&'a Pokemon> {
    pool.iter()
        .copied()
        .filter(|&candidate| {
            history
                .iter()
                .all(|&(guess, feedback)| feedback.matches(guess, candidate))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sample_pool() -> Vec<Pokemon> {
        vec![
            mon("Bulbasaur", 1, "grass", "poison", 7, 69),
            mon("Charmander", 1, "fire", "none", 6, 85),
            mon("Squirtle", 1, "water", "none", 5, 90),
            mon("Pidgey", 1, "normal", "flying", 3, 18),
            mon("Chikorita", 2, "grass", "none", 9, 64),
            mon("Noctowl", 2, "normal", "flying", 16, 408),
            mon("Torchic", 3, "fire", "none", 4, 25),
            mon("Roselia", 3, "grass", "poison", 3, 20),
            mon("Charmander-Clone", 1, "fire", "none", 6, 85),
        ]
    }

    /// Brute-force reference: test every feedback with `matches`
    fn partition_by_matches<'a>(
        space: &FeedbackSpace,
        guess: &Pokemon,
        pool: &[&'a Pokemon],
    ) -> Vec<Vec<&'a Pokemon>> {
        space
            .iter()
            .map(|feedback| {
                pool.iter()
                    .copied()
                    .filter(|target| feedback.matches(guess, target))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn agrees_with_exhaustive_matching() {
        let space = FeedbackSpace::new();
        let pool = sample_pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        for guess in &pool {
            let fast = partition(&space, guess, &refs);
            let reference = partition_by_matches(&space, guess, &refs);

            for feedback in space.iter() {
                assert_eq!(
                    fast.group(feedback),
                    reference[feedback.index()].as_slice(),
                    "guess {guess}, feedback {feedback}"
                );
            }
        }
    }

    #[test]
    fn groups_are_disjoint_and_cover_pool_minus_identical() {
        let space = FeedbackSpace::new();
        let pool = sample_pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        for guess in &pool {
            let groups = partition(&space, guess, &refs);
            let identical = pool.iter().filter(|p| p.same_attributes(guess)).count();

            let mut seen: Vec<&str> = groups
                .groups()
                .flat_map(|(_, group)| group.iter().map(|p| p.name()))
                .collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();

            assert_eq!(seen.len(), total, "a member appeared in two groups");
            assert_eq!(total, pool.len() - identical);
            assert_eq!(groups.covered(), total);
            assert_eq!(groups.excluded(), identical);
        }
    }

    #[test]
    fn group_preserves_pool_order() {
        let space = FeedbackSpace::new();
        let pool = sample_pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        let groups = partition(&space, &pool[3], &refs);
        for (_, group) in groups.groups() {
            let positions: Vec<usize> = group
                .iter()
                .map(|p| refs.iter().position(|r| r.name() == p.name()).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn repeated_type_lands_in_two_groups() {
        let space = FeedbackSpace::new();
        let guess = mon("Magikarp", 1, "water", "none", 9, 100);
        let odd = mon("Doubled", 1, "water", "water", 9, 100);
        let pool = vec![&odd];

        let groups = partition(&space, &guess, &pool);
        let same_slot: Feedback = "=ox==".parse().unwrap();
        let other_slot: Feedback = "=~x==".parse().unwrap();

        assert_eq!(groups.group(same_slot), &[&odd]);
        assert_eq!(groups.group(other_slot), &[&odd]);
        assert_eq!(groups.non_empty(), 2);
        assert_eq!(groups.covered(), 2);
        assert_eq!(groups.excluded(), 0);
    }

    #[test]
    fn empty_pool_has_no_groups() {
        let space = FeedbackSpace::new();
        let guess = mon("Eevee", 1, "normal", "none", 3, 65);
        let groups = partition(&space, &guess, &[]);

        assert_eq!(groups.non_empty(), 0);
        assert_eq!(groups.largest(), 0);
        assert_eq!(groups.groups().count(), 0);
    }

    #[test]
    fn filter_candidates_applies_every_observation() {
        let pool = sample_pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();

        // Hidden target: Chikorita
        let target = &pool[4];
        let first = &pool[1];
        let second = &pool[0];
        let history = vec![
            (first, Feedback::observe(first, target).unwrap()),
            (second, Feedback::observe(second, target).unwrap()),
        ];

        let remaining = filter_candidates(&refs, &history);
        assert!(remaining.iter().any(|p| p.name() == "Chikorita"));
        assert!(remaining.iter().all(|p| p.generation() == 2));
    }

    #[test]
    fn filter_candidates_without_history_keeps_pool() {
        let pool = sample_pool();
        let refs: Vec<&Pokemon> = pool.iter().collect();
        assert_eq!(filter_candidates(&refs, &[]).len(), pool.len());
    }
}

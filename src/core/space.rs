//! The full outcome space of a single guess
//!
//! Built once at startup and shared by reference with every partition and
//! entropy calculation. Never mutated after construction.

use super::{Feedback, NumericOp, SlotOp};

/// Number of distinct feedback values (3^5 minus the all-exact combination)
pub const FEEDBACK_COUNT: usize = 242;

/// Ordered, read-only list of every possible `Feedback`
///
/// Enumeration order nests gen (outermost), type1, type2, height, weight
/// (innermost), so `patterns()[i].index() == i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSpace {
    patterns: Vec<Feedback>,
}

impl FeedbackSpace {
    /// Enumerate every feedback combination
    ///
    /// # Examples
    /// ```
    /// use pokedex_entropy::core::{FeedbackSpace, FEEDBACK_COUNT};
    ///
    /// let space = FeedbackSpace::new();
    /// assert_eq!(space.len(), FEEDBACK_COUNT);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut patterns = Vec::with_capacity(FEEDBACK_COUNT);

        for generation in NumericOp::ALL {
            for type1 in SlotOp::ALL {
                for type2 in SlotOp::ALL {
                    for height in NumericOp::ALL {
                        for weight in NumericOp::ALL {
                            // Skips the all-exact combination
                            if let Some(feedback) =
                                Feedback::new(generation, type1, type2, height, weight)
                            {
                                patterns.push(feedback);
                            }
                        }
                    }
                }
            }
        }

        debug_assert_eq!(patterns.len(), FEEDBACK_COUNT);
        Self { patterns }
    }

    #[inline]
    #[must_use]
    pub fn patterns(&self) -> &[Feedback] {
        &self.patterns
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.patterns.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Get the feedback at a position in enumeration order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Feedback> {
        self.patterns.get(index).copied()
    }
}

impl Default for FeedbackSpace {
    fn default() -> Self {
        Self::new()
    }
}

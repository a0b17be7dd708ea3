//! Feedback for a single guess/target comparison
//!
//! Every guess reveals one operation per attribute:
//! - numeric fields (gen, height, weight): the target's value is lower than,
//!   equal to, or higher than the guess's value
//! - type slots: the guess's type is absent from the target, in the same slot,
//!   or present in the target's other slot
//!
//! The all-exact combination is not a `Feedback`: it means the guess *is* the
//! target and carries no information about the remaining candidates.

use super::Pokemon;
use std::cmp::Ordering;
use std::fmt;

/// Comparison outcome for a numeric attribute
///
/// Directions are relative to the guess: `Lesser` means the target's value is
/// less than the guess's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericOp {
    Lesser,
    Equal,
    Greater,
}

impl NumericOp {
    /// All operations in enumeration order
    pub const ALL: [Self; 3] = [Self::Lesser, Self::Equal, Self::Greater];

    /// Check whether this operation holds for the pair of values
    #[inline]
    #[must_use]
    pub const fn holds(self, guess: i32, target: i32) -> bool {
        match self {
            Self::Lesser => target < guess,
            Self::Equal => target == guess,
            Self::Greater => target > guess,
        }
    }

    /// The single operation that holds for the pair of values
    #[inline]
    #[must_use]
    pub fn observe(guess: i32, target: i32) -> Self {
        match target.cmp(&guess) {
            Ordering::Less => Self::Lesser,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }

    const fn digit(self) -> usize {
        match self {
            Self::Lesser => 0,
            Self::Equal => 1,
            Self::Greater => 2,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Lesser => '<',
            Self::Equal => '=',
            Self::Greater => '>',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '<' => Some(Self::Lesser),
            '=' => Some(Self::Equal),
            '>' => Some(Self::Greater),
            _ => None,
        }
    }
}

/// Comparison outcome for a type slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotOp {
    NoMatch,
    Match,
    WrongSlot,
}

impl SlotOp {
    /// All operations in enumeration order
    pub const ALL: [Self; 3] = [Self::NoMatch, Self::Match, Self::WrongSlot];

    /// Check whether this operation holds for a guess type against the
    /// target's type in the same slot and in the other slot
    #[inline]
    #[must_use]
    pub fn holds(self, guess_type: &str, target_same: &str, target_other: &str) -> bool {
        match self {
            Self::NoMatch => guess_type != target_same && guess_type != target_other,
            Self::Match => guess_type == target_same,
            Self::WrongSlot => guess_type == target_other,
        }
    }

    /// The operation a player is shown for this slot
    ///
    /// `Match` wins when the target carries the same type in both slots.
    #[inline]
    #[must_use]
    pub fn observe(guess_type: &str, target_same: &str, target_other: &str) -> Self {
        if guess_type == target_same {
            Self::Match
        } else if guess_type == target_other {
            Self::WrongSlot
        } else {
            Self::NoMatch
        }
    }

    const fn digit(self) -> usize {
        match self {
            Self::NoMatch => 0,
            Self::Match => 1,
            Self::WrongSlot => 2,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::NoMatch => 'x',
            Self::Match => 'o',
            Self::WrongSlot => '~',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' | 'X' => Some(Self::NoMatch),
            'o' | 'O' => Some(Self::Match),
            '~' => Some(Self::WrongSlot),
            _ => None,
        }
    }
}

/// Feedback for one guess: one operation per attribute
///
/// Never the all-exact combination. There are exactly 242 distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    generation: NumericOp,
    type1: SlotOp,
    type2: SlotOp,
    height: NumericOp,
    weight: NumericOp,
}

/// Base-3 value of the all-exact combination (=, o, o, =, =)
const EXACT_RAW: usize = 81 + 27 + 9 + 3 + 1;

impl Feedback {
    /// Build a feedback value
    ///
    /// Returns `None` for the all-exact combination.
    ///
    /// # Examples
    /// ```
    /// use pokedex_entropy::core::{Feedback, NumericOp, SlotOp};
    ///
    /// let exact = Feedback::new(
    ///     NumericOp::Equal, SlotOp::Match, SlotOp::Match, NumericOp::Equal, NumericOp::Equal,
    /// );
    /// assert!(exact.is_none());
    ///
    /// let lower = Feedback::new(
    ///     NumericOp::Lesser, SlotOp::Match, SlotOp::Match, NumericOp::Equal, NumericOp::Equal,
    /// );
    /// assert!(lower.is_some());
    /// ```
    #[must_use]
    pub const fn new(
        generation: NumericOp,
        type1: SlotOp,
        type2: SlotOp,
        height: NumericOp,
        weight: NumericOp,
    ) -> Option<Self> {
        let feedback = Self {
            generation,
            type1,
            type2,
            height,
            weight,
        };
        if feedback.raw() == EXACT_RAW {
            None
        } else {
            Some(feedback)
        }
    }

    #[inline]
    #[must_use]
    pub const fn generation(self) -> NumericOp {
        self.generation
    }

    #[inline]
    #[must_use]
    pub const fn type1(self) -> SlotOp {
        self.type1
    }

    #[inline]
    #[must_use]
    pub const fn type2(self) -> SlotOp {
        self.type2
    }

    #[inline]
    #[must_use]
    pub const fn height(self) -> NumericOp {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn weight(self) -> NumericOp {
        self.weight
    }

    /// Check whether this feedback is consistent with `guess` against `target`
    ///
    /// All five per-field predicates must hold.
    ///
    /// # Examples
    /// ```
    /// use pokedex_entropy::core::{Feedback, Pokemon};
    ///
    /// let charmander = Pokemon::new("Charmander", 1, "fire", "none", 6, 85).unwrap();
    /// let squirtle = Pokemon::new("Squirtle", 1, "water", "none", 5, 90).unwrap();
    ///
    /// let feedback: Feedback = "=xo<>".parse().unwrap();
    /// assert!(feedback.matches(&charmander, &squirtle));
    /// ```
    #[must_use]
    pub fn matches(self, guess: &Pokemon, target: &Pokemon) -> bool {
        self.generation.holds(guess.generation(), target.generation())
            && self.type1.holds(guess.type1(), target.type1(), target.type2())
            && self.type2.holds(guess.type2(), target.type2(), target.type1())
            && self.height.holds(guess.height(), target.height())
            && self.weight.holds(guess.weight(), target.weight())
    }

    /// The feedback shown when `guess` is played and `target` is hidden
    ///
    /// Returns `None` when every field is exact, i.e. the game is won.
    #[must_use]
    pub fn observe(guess: &Pokemon, target: &Pokemon) -> Option<Self> {
        Self::new(
            NumericOp::observe(guess.generation(), target.generation()),
            SlotOp::observe(guess.type1(), target.type1(), target.type2()),
            SlotOp::observe(guess.type2(), target.type2(), target.type1()),
            NumericOp::observe(guess.height(), target.height()),
            NumericOp::observe(guess.weight(), target.weight()),
        )
    }

    /// Position of this feedback in `FeedbackSpace` order (0-241)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        let raw = self.raw();
        if raw < EXACT_RAW { raw } else { raw - 1 }
    }

    /// Base-3 encoding with gen as the most significant digit
    const fn raw(self) -> usize {
        self.generation.digit() * 81
            + self.type1.digit() * 27
            + self.type2.digit() * 9
            + self.height.digit() * 3
            + self.weight.digit()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.generation.symbol(),
            self.type1.symbol(),
            self.type2.symbol(),
            self.height.symbol(),
            self.weight.symbol()
        )
    }
}

/// Error parsing a feedback code like `<xo=>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    InvalidLength(usize),
    InvalidSymbol { position: usize, symbol: char },
    Exact,
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol { position, symbol } => {
                let expected = if matches!(position, 1 | 2) {
                    "one of x, o, ~"
                } else {
                    "one of <, =, >"
                };
                write!(
                    f,
                    "Invalid symbol '{symbol}' at position {}, expected {expected}",
                    position + 1
                )
            }
            Self::Exact => write!(f, "All-exact feedback means the game is already won"),
        }
    }
}

impl std::error::Error for FeedbackParseError {}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse a code in field order gen, type1, type2, height, weight
    ///
    /// Numeric fields use `<`, `=`, `>`; type slots use `x` (no match),
    /// `o` (match) and `~` (wrong slot).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != 5 {
            return Err(FeedbackParseError::InvalidLength(symbols.len()));
        }

        let numeric = |position: usize| {
            NumericOp::from_symbol(symbols[position]).ok_or(FeedbackParseError::InvalidSymbol {
                position,
                symbol: symbols[position],
            })
        };
        let slot = |position: usize| {
            SlotOp::from_symbol(symbols[position]).ok_or(FeedbackParseError::InvalidSymbol {
                position,
                symbol: symbols[position],
            })
        };

        Self::new(numeric(0)?, slot(1)?, slot(2)?, numeric(3)?, numeric(4)?)
            .ok_or(FeedbackParseError::Exact)
    }
}

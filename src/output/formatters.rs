//! Formatting utilities for terminal output

use crate::core::{Feedback, NumericOp, SlotOp};

/// Symbol for a numeric field: where the target lies relative to the guess
#[must_use]
pub const fn numeric_symbol(op: NumericOp) -> char {
    match op {
        NumericOp::Lesser => '↓',
        NumericOp::Equal => '✓',
        NumericOp::Greater => '↑',
    }
}

/// Symbol for a type slot
#[must_use]
pub const fn slot_symbol(op: SlotOp) -> char {
    match op {
        SlotOp::NoMatch => '✗',
        SlotOp::Match => '✓',
        SlotOp::WrongSlot => '⇄',
    }
}

/// Format feedback as labelled symbols, e.g. `Gen ✓ | Type1 ✗ | ...`
#[must_use]
pub fn feedback_to_symbols(feedback: Feedback) -> String {
    format!(
        "Gen {} | Type1 {} | Type2 {} | Height {} | Weight {}",
        numeric_symbol(feedback.generation()),
        slot_symbol(feedback.type1()),
        slot_symbol(feedback.type2()),
        numeric_symbol(feedback.height()),
        numeric_symbol(feedback.weight()),
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar relative to the pool's maximum `log2(pool_size)`
#[must_use]
pub fn entropy_bar(entropy: f64, pool_size: usize, width: usize) -> String {
    let max_entropy = (pool_size.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

//! Formatting utilities for terminal output

use crate::core::ConstraintPredicate;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the best score attainable
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

/// Render predicates back into the letter-digit pair form they were typed in
#[must_use]
pub fn format_predicates(predicates: &[ConstraintPredicate]) -> String {
    predicates.iter().map(ToString::to_string).collect()
}

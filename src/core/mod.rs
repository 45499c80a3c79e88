//! Core domain types for the advisor
//!
//! Words, per-position feedback, patterns and constraints. Everything here is
//! pure and cannot fail once given well-formed words.

mod constraint;
mod feedback;
mod pattern;
mod word;

pub use constraint::{ConstraintError, ConstraintPredicate, filter_candidates, parse_constraints};
pub use feedback::{FeedbackClass, classify};
pub use pattern::{PATTERN_COUNT, Pattern};
pub use word::{WORD_LEN, Word, WordError};

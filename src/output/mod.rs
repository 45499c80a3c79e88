//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_candidates, print_exhausted, print_hard_mode,
    print_recommendation, print_solved, print_top_entropies, print_worst_case, scoring_progress,
};

//! Entropy-based guess evaluation
//!
//! Implements Shannon entropy calculation for feedback pattern distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, max_entropy, partition, pattern_counts,
    shannon_entropy,
};
pub use selector::{best_scored, score_words, select_best_guess, select_best_with_metrics};

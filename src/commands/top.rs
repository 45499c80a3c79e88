//! Top entropies command
//!
//! Reads the checkpoint store and ranks the words recorded in it.

use crate::solver::EntropyCache;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Highest-scoring checkpointed words
#[derive(Debug, Clone, PartialEq)]
pub struct TopEntropies {
    /// Best words first; ties in alphabetical order
    pub words: Vec<(String, f64)>,
    /// Words scored in the checkpoint overall
    pub total: usize,
    /// Scores grouped by whole bits
    pub histogram: BTreeMap<u32, usize>,
}

/// Rank the scores stored at `cache`
///
/// Only words scoring at least `min_bits` are listed, at most `count` of them;
/// the histogram always covers every stored score.
///
/// # Errors
///
/// Returns an error if the checkpoint exists but cannot be read or parsed.
pub fn top_entropies(cache: &EntropyCache, count: usize, min_bits: f64) -> Result<TopEntropies> {
    let entropies = cache
        .load()
        .with_context(|| format!("cannot rank {}", cache.path().display()))?
        .map(|stored| stored.scores)
        .unwrap_or_default();

    let mut histogram = BTreeMap::new();
    for &entropy in entropies.values() {
        // Cast is safe: entropies are non-negative and below 64
        *histogram.entry(entropy.floor() as u32).or_insert(0) += 1;
    }

    let total = entropies.len();
    let mut words: Vec<(String, f64)> = entropies
        .into_iter()
        .filter(|&(_, entropy)| entropy >= min_bits)
        .collect();
    words.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(count);

    Ok(TopEntropies {
        words,
        total,
        histogram,
    })
}

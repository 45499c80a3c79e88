//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and a candidate set, computes the distribution of feedback
//! patterns over all 243 outcomes and the expected information gain.

use crate::core::{PATTERN_COUNT, Pattern, Word};
use std::borrow::Borrow;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Count, for every pattern, the candidates that would make `guess` produce it
///
/// Slot `i` holds the count for the pattern with index `i` in
/// [`Pattern::all`] order. Every candidate lands in exactly one slot, so the
/// counts always sum to `candidates.len()`.
#[must_use]
pub fn pattern_counts<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> [usize; PATTERN_COUNT] {
    let mut counts = [0usize; PATTERN_COUNT];
    for candidate in candidates {
        counts[Pattern::simulate(guess, candidate.borrow()).index()] += 1;
    }
    counts
}

/// Split candidates into the 243 buckets a guess induces
///
/// Bucket `i` corresponds to the pattern with index `i`; candidate order is
/// preserved within each bucket.
#[must_use]
pub fn partition<'a, W: Borrow<Word>>(guess: &Word, candidates: &'a [W]) -> Vec<Vec<&'a Word>> {
    let mut buckets: Vec<Vec<&Word>> = vec![Vec::new(); PATTERN_COUNT];
    for candidate in candidates {
        let candidate = candidate.borrow();
        buckets[Pattern::simulate(guess, candidate).index()].push(candidate);
    }
    buckets
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, assuming every candidate is
/// equally likely to be the secret.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    shannon_entropy(&pattern_counts(guess, candidates))
}

/// Calculate Shannon entropy from a count distribution
///
/// H = Σ p * log₂(1/p), with empty slots contributing nothing.
///
/// # Properties
/// - Returns 0.0 for an empty or single-outcome distribution
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n non-empty slots
///
/// # Examples
/// ```
/// use wordle_advisor::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 0, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (total / count as f64).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = pattern_counts(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.iter().copied().max().unwrap_or(0),
    }
}

/// Upper bound on the entropy any guess can reach against `candidate_count` words
#[must_use]
pub fn max_entropy(candidate_count: usize) -> f64 {
    if candidate_count == 0 {
        0.0
    } else {
        (candidate_count as f64).log2()
    }
}

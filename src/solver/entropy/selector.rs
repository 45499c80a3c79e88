//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).
//! Scoring runs in parallel; ties always go to the word that comes first in the
//! guess pool so results do not depend on thread scheduling.

use super::calculator::{GuessMetrics, calculate_entropy, calculate_metrics};
use crate::core::Word;
use rayon::prelude::*;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Score every word in `guess_pool` against `candidates`, in pool order
#[must_use]
pub fn score_words<G, C>(guess_pool: &[G], candidates: &[C]) -> Vec<f64>
where
    G: Borrow<Word> + Sync,
    C: Borrow<Word> + Sync,
{
    guess_pool
        .par_iter()
        .map(|guess| calculate_entropy(guess.borrow(), candidates))
        .collect()
}

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("arose").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros"); // AEROS has higher entropy than AAAAA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a, G, C>(guess_pool: &'a [G], candidates: &[C]) -> Option<(&'a Word, f64)>
where
    G: Borrow<Word> + Sync,
    C: Borrow<Word> + Sync,
{
    select_best_with_metrics(guess_pool, candidates).map(|(guess, metrics)| (guess, metrics.entropy))
}

/// Like [`select_best_guess`], keeping the winner's full metrics
#[must_use]
pub fn select_best_with_metrics<'a, G, C>(
    guess_pool: &'a [G],
    candidates: &[C],
) -> Option<(&'a Word, GuessMetrics)>
where
    G: Borrow<Word> + Sync,
    C: Borrow<Word> + Sync,
{
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let guess = guess.borrow();
            (index, guess, calculate_metrics(guess, candidates))
        })
        .max_by(|(i1, _, m1), (i2, _, m2)| prefer_earlier(m1.entropy, *i1, m2.entropy, *i2))
        .map(|(_, guess, metrics)| (guess, metrics))
}

/// Pick the highest score among already-scored words, earliest on ties
#[must_use]
pub fn best_scored<'a, I>(scored: I) -> Option<(&'a Word, f64)>
where
    I: IntoIterator<Item = (&'a Word, f64)>,
{
    scored
        .into_iter()
        .enumerate()
        .max_by(|(i1, (_, e1)), (i2, (_, e2))| prefer_earlier(*e1, *i1, *e2, *i2))
        .map(|(_, best)| best)
}

/// Order by entropy, then by reversed position so `max_by` favours the earlier word
fn prefer_earlier(e1: f64, i1: usize, e2: f64, i2: usize) -> Ordering {
    e1.total_cmp(&e2).then_with(|| i2.cmp(&i1))
}

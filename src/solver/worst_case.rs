//! Worst-case depth analysis
//!
//! Plays the advisor against every possible secret at once: the candidates are
//! split by the feedback each guess would produce, and every bucket is chased
//! breadth-first until it is solved. The deepest leaf is the number of guesses
//! the advisor needs in the worst case.

use super::engine::PoolMode;
use super::entropy::select_best_guess;
use crate::core::{PATTERN_COUNT, Pattern, Word};
use log::debug;
use std::collections::{BTreeMap, VecDeque};

/// Summary of a worst-case search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorstCase {
    /// Guesses needed for the hardest secret, counting the first guess
    pub depth: usize,
    /// A secret that takes `depth` guesses (the first one found)
    pub word: Option<Word>,
    /// Guesses evaluated during the search
    pub nodes_explored: usize,
    /// Secrets no eligible guess could separate
    pub unresolved: usize,
    /// Secrets solved at each depth
    pub distribution: BTreeMap<usize, usize>,
}

struct Node<'c> {
    guess: Word,
    candidates: Vec<&'c Word>,
    depth: usize,
}

/// Find how many guesses the advisor needs for its hardest secret
///
/// `first_guess` is played against every answer; every later guess is the
/// entropy-best word from the pool `pool` selects for that branch (the branch's
/// own candidates, or the whole guess list).
#[must_use]
pub fn worst_case(
    guesses: &[Word],
    answers: &[Word],
    first_guess: &Word,
    pool: PoolMode,
) -> WorstCase {
    let mut result = WorstCase {
        depth: 0,
        word: None,
        nodes_explored: 0,
        unresolved: 0,
        distribution: BTreeMap::new(),
    };
    if answers.is_empty() {
        return result;
    }

    let mut queue = VecDeque::from([Node {
        guess: first_guess.clone(),
        candidates: answers.iter().collect(),
        depth: 1,
    }]);

    while let Some(node) = queue.pop_front() {
        result.nodes_explored += 1;

        let mut buckets: Vec<Vec<&Word>> = vec![Vec::new(); PATTERN_COUNT];
        for &candidate in &node.candidates {
            buckets[Pattern::simulate(&node.guess, candidate).index()].push(candidate);
        }

        for (pattern, bucket) in Pattern::all().zip(buckets) {
            if bucket.is_empty() {
                continue;
            }
            if pattern.is_perfect() {
                result.record(bucket[0], node.depth);
                continue;
            }
            if bucket.len() == 1 {
                result.record(bucket[0], node.depth + 1);
                continue;
            }

            let best = match pool {
                PoolMode::Candidates => select_best_guess(&bucket, &bucket),
                PoolMode::Corpus => select_best_guess(guesses, &bucket),
            }
            .filter(|&(_, entropy)| entropy > 0.0)
            .map(|(guess, _)| guess.clone());

            if let Some(guess) = best {
                queue.push_back(Node {
                    guess,
                    candidates: bucket,
                    depth: node.depth + 1,
                });
            } else {
                debug!(
                    "no guess separates {} candidates at depth {}",
                    bucket.len(),
                    node.depth + 1
                );
                result.unresolved += bucket.len();
            }
        }
    }

    debug!(
        "worst case {} guesses after exploring {} nodes",
        result.depth, result.nodes_explored
    );
    result
}

impl WorstCase {
    fn record(&mut self, secret: &Word, depth: usize) {
        *self.distribution.entry(depth).or_insert(0) += 1;
        if depth > self.depth {
            self.depth = depth;
            self.word = Some(secret.clone());
        }
    }

    /// Mean guesses over every solved secret
    #[must_use]
    pub fn average_depth(&self) -> f64 {
        let (solved, total) = self
            .distribution
            .iter()
            .fold((0usize, 0usize), |(solved, total), (&depth, &count)| {
                (solved + count, total + depth * count)
            });
        if solved == 0 {
            0.0
        } else {
            total as f64 / solved as f64
        }
    }
}

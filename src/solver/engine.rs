//! Guess selection session
//!
//! A `Session` walks the advisor's state machine:
//!
//! ```text
//! Initial -> FirstGuessComputed -> AwaitingConstraints -> Filtered
//!     Filtered -> Solved | Exhausted
//!     Filtered -> NextGuessComputed -> AwaitingConstraints
//! ```
//!
//! It owns the guess list, the shrinking set of candidate answers and the
//! accumulated predicates, and is driven entirely by the caller: nothing here
//! reads from a terminal.

use super::cache::{CheckpointPolicy, EntropyCache, score_corpus};
use super::entropy::{
    GuessMetrics, best_scored, calculate_metrics, max_entropy, select_best_with_metrics,
};
use crate::core::{
    ConstraintError, ConstraintPredicate, Word, filter_candidates, parse_constraints,
};
use crate::wordlists::Corpus;
use indicatif::ProgressBar;
use log::{debug, info};
use std::fmt;
use thiserror::Error;

/// Which words may be proposed once constraints have narrowed the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolMode {
    /// Only words still consistent with every constraint
    #[default]
    Candidates,
    /// Any word in the guess list, even ones already ruled out as the secret
    Corpus,
}

/// Knobs for a session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Checkpoint store for the first, unconstrained pass; `None` disables it
    pub cache: Option<EntropyCache>,
    pub checkpoint: CheckpointPolicy,
    pub pool: PoolMode,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    FirstGuessComputed,
    AwaitingConstraints,
    Filtered,
    NextGuessComputed,
    Solved,
    Exhausted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::FirstGuessComputed => "first guess computed",
            Self::AwaitingConstraints => "awaiting constraints",
            Self::Filtered => "filtered",
            Self::NextGuessComputed => "next guess computed",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// A suggested guess with its score
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub guess: Word,
    /// Entropy, expected remaining and worst bucket against the candidates
    pub metrics: GuessMetrics,
    /// Candidates the guess was scored against
    pub candidates: usize,
    /// log2 of the candidate count; no guess can score higher
    pub max_entropy: f64,
}

impl Recommendation {
    /// Expected information gain in bits
    #[must_use]
    pub const fn entropy(&self) -> f64 {
        self.metrics.entropy
    }
}

/// What happened after a round of constraints
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// More than one candidate remains; try this next
    NextGuess(Recommendation),
    /// Exactly one candidate remains
    Solved(Word),
    /// No word satisfies every constraint
    Exhausted,
}

/// Misuse of a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error("cannot {action} while the session is {phase}")]
    OutOfTurn { action: &'static str, phase: Phase },
    #[error("no words available to score")]
    EmptyPool,
}

/// One run of the advisor against fixed word lists
#[derive(Debug)]
pub struct Session {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    candidates: Vec<Word>,
    predicates: Vec<ConstraintPredicate>,
    phase: Phase,
    config: SessionConfig,
    evaluations: usize,
}

impl Session {
    /// Start a session where every word is both a guess and a possible answer
    #[must_use]
    pub fn new(corpus: Corpus, config: SessionConfig) -> Self {
        Self::with_answers(corpus.clone(), corpus, config)
    }

    /// Start a session that guesses from `guesses` to find one of `answers`
    ///
    /// The answers are the initial candidate set.
    #[must_use]
    pub fn with_answers(guesses: Corpus, answers: Corpus, config: SessionConfig) -> Self {
        let answers = answers.into_words();
        Self {
            guesses: guesses.into_words(),
            candidates: answers.clone(),
            answers,
            predicates: Vec::new(),
            phase: Phase::Initial,
            config,
            evaluations: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Words that may be played
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Every possible secret, before any constraint
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words still consistent with every constraint so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Every predicate accepted so far, in the order given
    #[must_use]
    pub fn predicates(&self) -> &[ConstraintPredicate] {
        &self.predicates
    }

    /// Entropy scores computed by this session (cached scores excluded)
    #[must_use]
    pub const fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Score every guess word against every answer and recommend the opening guess
    ///
    /// Uses the checkpoint store when one is configured.
    ///
    /// # Errors
    /// `SessionError::OutOfTurn` unless the session is in its initial phase.
    pub fn first_guess(&mut self, progress: &ProgressBar) -> Result<Recommendation, SessionError> {
        self.expect_phase(Phase::Initial, "compute the first guess")?;

        let (guess, metrics) = if let Some(cache) = &self.config.cache {
            let scores = score_corpus(
                &self.guesses,
                &self.answers,
                cache,
                self.config.checkpoint,
                progress,
            );
            self.evaluations += scores.computed;

            best_scored(self.guesses.iter().filter_map(|word| {
                scores
                    .entropies
                    .get(word.text())
                    .map(|&entropy| (word, entropy))
            }))
            .map(|(word, _)| (word.clone(), calculate_metrics(word, &self.answers)))
        } else {
            self.evaluations += self.guesses.len();
            let best = select_best_with_metrics(&self.guesses, &self.answers)
                .map(|(word, metrics)| (word.clone(), metrics));
            progress.finish_and_clear();
            best
        }
        .ok_or(SessionError::EmptyPool)?;

        let recommendation = self.recommend(guess, metrics);
        self.transition(Phase::FirstGuessComputed);
        info!(
            "opening guess {} ({:.4} bits)",
            recommendation.guess,
            recommendation.entropy()
        );
        self.transition(Phase::AwaitingConstraints);
        Ok(recommendation)
    }

    /// Apply one round of constraints and decide what comes next
    ///
    /// A malformed constraint string is rejected without touching the session,
    /// so the caller can simply ask again. An empty string adds nothing and
    /// re-scores the current candidates.
    ///
    /// # Errors
    /// `SessionError::Constraint` for malformed input, `SessionError::OutOfTurn`
    /// unless the session is awaiting constraints.
    pub fn submit(&mut self, constraints: &str) -> Result<Outcome, SessionError> {
        self.expect_phase(Phase::AwaitingConstraints, "accept constraints")?;

        let new_predicates = parse_constraints(constraints)?;
        debug!(
            "adding {} predicates to {} already known",
            new_predicates.len(),
            self.predicates.len()
        );
        self.predicates.extend(new_predicates);

        self.candidates = filter_candidates(&self.candidates, &self.predicates);
        self.transition(Phase::Filtered);
        debug!("{} candidates remain", self.candidates.len());

        match self.candidates.as_slice() {
            [] => {
                self.transition(Phase::Exhausted);
                Ok(Outcome::Exhausted)
            }
            [only] => {
                let only = only.clone();
                self.transition(Phase::Solved);
                info!("solved: {only}");
                Ok(Outcome::Solved(only))
            }
            _ => {
                let recommendation = self.next_guess()?;
                self.transition(Phase::NextGuessComputed);
                info!(
                    "next guess {} ({:.4} of {:.4} bits)",
                    recommendation.guess,
                    recommendation.entropy(),
                    recommendation.max_entropy
                );
                self.transition(Phase::AwaitingConstraints);
                Ok(Outcome::NextGuess(recommendation))
            }
        }
    }

    /// Re-score against the narrowed candidates; the checkpoint is never used here
    fn next_guess(&mut self) -> Result<Recommendation, SessionError> {
        let pool = match self.config.pool {
            PoolMode::Candidates => &self.candidates,
            PoolMode::Corpus => &self.guesses,
        };
        self.evaluations += pool.len();

        let (guess, metrics) = select_best_with_metrics(pool, &self.candidates)
            .map(|(word, metrics)| (word.clone(), metrics))
            .ok_or(SessionError::EmptyPool)?;
        Ok(self.recommend(guess, metrics))
    }

    fn recommend(&self, guess: Word, metrics: GuessMetrics) -> Recommendation {
        Recommendation {
            guess,
            metrics,
            candidates: self.candidates.len(),
            max_entropy: max_entropy(self.candidates.len()),
        }
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::OutOfTurn {
                action,
                phase: self.phase,
            })
        }
    }

    fn transition(&mut self, next: Phase) {
        debug!("session {} -> {}", self.phase, next);
        self.phase = next;
    }
}

//! Guess selection
//!
//! Entropy scoring, the checkpointed first pass over the corpus, the session
//! state machine, worst-case analysis and the hard-mode comparison.

pub mod cache;
mod engine;
pub mod entropy;
mod hard_mode;
mod worst_case;

pub use cache::{
    CacheError, CheckpointPolicy, CorpusPass, CorpusScores, EntropyCache, EntropyMap,
    JsonCheckpoint, StoredScores, corpus_fingerprint, score_corpus,
};
pub use engine::{Outcome, Phase, PoolMode, Recommendation, Session, SessionConfig, SessionError};
pub use hard_mode::{HardModeReport, NOTABLE_COST, PartitionDiff, ScoredGuess, compare_hard_mode};
pub use worst_case::{WorstCase, worst_case};

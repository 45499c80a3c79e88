//! Checkpointed entropy store for the full-corpus pass
//!
//! Scoring every guess word against every possible answer is by far the most
//! expensive step, so its results are persisted and reused across runs. A
//! checkpoint records a fingerprint of the word lists it was computed from and
//! is ignored when the lists change. The store is only ever used for the
//! unconstrained pass; scores against a narrowed candidate set are never read
//! from or written to it.

use crate::core::Word;
use crate::solver::entropy::score_words;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scores keyed by word text
pub type EntropyMap = FxHashMap<String, f64>;

/// Words scored between checkpoint writes unless configured otherwise
pub const DEFAULT_CHECKPOINT_EVERY: usize = 20;

/// Failure reading or writing a checkpoint file
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("checkpoint {} is unreadable: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("checkpoint {} could not be accessed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How often a long pass persists its progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointPolicy {
    /// Newly scored items between saves (at least 1)
    pub every: usize,
}

impl Default for CheckpointPolicy {
    fn default() -> Self {
        Self {
            every: DEFAULT_CHECKPOINT_EVERY,
        }
    }
}

impl CheckpointPolicy {
    #[must_use]
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

/// Identify an ordered pair of guess and answer lists
///
/// Stable across runs, so a checkpoint can tell whether it was computed from
/// the lists currently loaded.
#[must_use]
pub fn corpus_fingerprint(guesses: &[Word], answers: &[Word]) -> u64 {
    let mut hasher = FxHasher::default();
    for list in [guesses, answers] {
        list.len().hash(&mut hasher);
        for word in list {
            word.text().hash(&mut hasher);
        }
    }
    hasher.finish()
}

/// A JSON document replaced atomically on every write
#[derive(Debug, Clone)]
pub struct JsonCheckpoint {
    path: PathBuf,
}

impl JsonCheckpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored document; a missing file is `None`
    ///
    /// # Errors
    /// `CacheError::Corrupt` if the file exists but does not parse,
    /// `CacheError::Io` if it cannot be opened or read.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, CacheError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| {
                if source.is_io() {
                    CacheError::Io {
                        path: self.path.clone(),
                        source: source.into(),
                    }
                } else {
                    CacheError::Corrupt {
                        path: self.path.clone(),
                        source,
                    }
                }
            })
    }

    /// Persist `document`, replacing any previous one
    ///
    /// The document is written to a sibling temporary file which is then
    /// renamed over the checkpoint, so a crash mid-write leaves the prior
    /// checkpoint intact.
    ///
    /// # Errors
    /// `CacheError::Io` if the temporary file cannot be written or renamed.
    pub fn write<T: Serialize>(&self, document: &T) -> Result<(), CacheError> {
        let tmp_path = self.tmp_path();

        let result = self.write_to(&tmp_path, document).and_then(|()| {
            fs::rename(&tmp_path, &self.path).map_err(|source| self.io_error(source))
        });

        if result.is_err() && tmp_path.is_file() {
            // best effort: the checkpoint itself is untouched either way
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn write_to<T: Serialize>(&self, tmp_path: &Path, document: &T) -> Result<(), CacheError> {
        let file = File::create(tmp_path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, document).map_err(|source| CacheError::Io {
            path: tmp_path.to_path_buf(),
            source: source.into(),
        })?;
        writer.flush().map_err(|source| self.io_error(source))?;

        let file = writer
            .into_inner()
            .map_err(|e| self.io_error(e.into_error()))?;
        file.sync_all().map_err(|source| self.io_error(source))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// On-disk form of the entropy checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScores {
    /// [`corpus_fingerprint`] of the lists the scores were computed from
    pub fingerprint: u64,
    /// Sorted so that rewrites of the same scores are byte-identical
    pub scores: BTreeMap<String, f64>,
}

/// File-backed checkpoint of full-corpus entropy scores
#[derive(Debug, Clone)]
pub struct EntropyCache {
    file: JsonCheckpoint,
}

impl EntropyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonCheckpoint::new(path),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the stored checkpoint whatever lists it belongs to
    ///
    /// # Errors
    /// `CacheError::Corrupt` if the file exists but does not parse,
    /// `CacheError::Io` if it cannot be opened or read.
    pub fn load(&self) -> Result<Option<StoredScores>, CacheError> {
        self.file.read()
    }

    /// Scores computed from the lists identified by `fingerprint`
    ///
    /// An unreadable checkpoint, or one built from other lists, is discarded
    /// and the pass simply recomputes from scratch.
    #[must_use]
    pub fn load_for(&self, fingerprint: u64) -> EntropyMap {
        match self.load() {
            Ok(None) => EntropyMap::default(),
            Ok(Some(stored)) if stored.fingerprint == fingerprint => {
                stored.scores.into_iter().collect()
            }
            Ok(Some(stored)) => {
                warn!(
                    "checkpoint {} was built from different word lists; discarding {} scores",
                    self.path().display(),
                    stored.scores.len()
                );
                EntropyMap::default()
            }
            Err(e) => {
                warn!("{e}; discarding it and recomputing");
                EntropyMap::default()
            }
        }
    }

    /// Persist the whole mapping, replacing any previous checkpoint
    ///
    /// # Errors
    /// `CacheError::Io` if the checkpoint cannot be written.
    pub fn save(&self, fingerprint: u64, entropies: &EntropyMap) -> Result<(), CacheError> {
        self.file.write(&StoredScores {
            fingerprint,
            scores: entropies
                .iter()
                .map(|(word, &entropy)| (word.clone(), entropy))
                .collect(),
        })
    }
}

/// Result of the full-corpus scoring pass
#[derive(Debug, Clone)]
pub struct CorpusScores {
    /// Score of every guess word
    pub entropies: EntropyMap,
    /// Words whose score came from the checkpoint
    pub reused: usize,
    /// Words scored during this pass
    pub computed: usize,
}

/// Resumable scoring of every guess word against every answer
///
/// Each [`CorpusPass::step`] scores one batch of `policy.every` words and
/// checkpoints the full mapping. Failing to save is logged and does not abort
/// the pass.
pub struct CorpusPass<'w> {
    answers: &'w [Word],
    cache: &'w EntropyCache,
    fingerprint: u64,
    batch: usize,
    entropies: EntropyMap,
    pending: Vec<&'w Word>,
    scored: usize,
    reused: usize,
}

impl<'w> CorpusPass<'w> {
    /// Load what the checkpoint already knows and queue the rest
    #[must_use]
    pub fn start(
        guesses: &'w [Word],
        answers: &'w [Word],
        cache: &'w EntropyCache,
        policy: CheckpointPolicy,
    ) -> Self {
        let fingerprint = corpus_fingerprint(guesses, answers);
        let mut entropies = cache.load_for(fingerprint);

        let known: FxHashSet<&str> = guesses.iter().map(Word::text).collect();
        let before = entropies.len();
        entropies.retain(|word, _| known.contains(word.as_str()));
        if entropies.len() < before {
            warn!(
                "dropped {} checkpoint entries for words outside the guess list",
                before - entropies.len()
            );
        }

        let reused = entropies.len();
        info!(
            "loaded {reused} cached scores from {}",
            cache.path().display()
        );

        let pending: Vec<&Word> = guesses
            .iter()
            .filter(|word| !entropies.contains_key(word.text()))
            .collect();
        debug!("{} words left to score", pending.len());

        Self {
            answers,
            cache,
            fingerprint,
            batch: policy.every.max(1),
            entropies,
            pending,
            scored: 0,
            reused,
        }
    }

    #[must_use]
    pub const fn reused(&self) -> usize {
        self.reused
    }

    /// Words still waiting to be scored
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len() - self.scored
    }

    /// Score and checkpoint the next batch; returns how many words it held
    ///
    /// Returns 0 once every word is scored.
    pub fn step(&mut self) -> usize {
        let end = (self.scored + self.batch).min(self.pending.len());
        let batch = &self.pending[self.scored..end];
        if batch.is_empty() {
            return 0;
        }

        let scores = score_words(batch, self.answers);
        for (word, entropy) in batch.iter().zip(scores) {
            self.entropies.insert(word.text().to_string(), entropy);
        }
        self.scored = end;
        self.checkpoint();
        batch.len()
    }

    /// Run any remaining batches, save once more and hand back the scores
    #[must_use]
    pub fn finish(mut self) -> CorpusScores {
        while self.step() > 0 {}
        self.checkpoint();

        CorpusScores {
            entropies: self.entropies,
            reused: self.reused,
            computed: self.pending.len(),
        }
    }

    fn checkpoint(&self) {
        match self.cache.save(self.fingerprint, &self.entropies) {
            Ok(()) => debug!("checkpointed {} scores", self.entropies.len()),
            Err(e) => warn!("failed to save checkpoint: {e}"),
        }
    }
}

/// Score every guess word against every answer, resuming from `cache`
///
/// Words already present in a matching checkpoint are skipped; the rest are
/// scored in batches of `policy.every`, saving after each batch and once more
/// on completion.
pub fn score_corpus(
    guesses: &[Word],
    answers: &[Word],
    cache: &EntropyCache,
    policy: CheckpointPolicy,
    progress: &ProgressBar,
) -> CorpusScores {
    let mut pass = CorpusPass::start(guesses, answers, cache, policy);

    progress.set_length(guesses.len() as u64);
    progress.set_position(pass.reused() as u64);
    loop {
        let scored = pass.step();
        if scored == 0 {
            break;
        }
        progress.inc(scored as u64);
    }

    let scores = pass.finish();
    progress.finish_and_clear();
    scores
}

//! Hard-mode comparison
//!
//! In hard mode every guess must be consistent with the feedback already seen.
//! For each bucket of answers the opening guess can leave behind, this compares
//! the best guess still allowed under that rule with the best guess from the
//! whole list, and records how many bits the restriction costs. Progress is
//! checkpointed so an interrupted run picks up where it stopped.

use super::cache::{CheckpointPolicy, JsonCheckpoint, corpus_fingerprint};
use super::entropy::{partition, select_best_guess};
use crate::core::{Pattern, Word};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Cost below which the two guesses are considered equally good
pub const NOTABLE_COST: f64 = 0.001;

/// A guess and its entropy against one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGuess {
    pub word: String,
    pub entropy: f64,
}

impl ScoredGuess {
    fn new(word: &Word, entropy: f64) -> Self {
        Self {
            word: word.text().to_string(),
            entropy,
        }
    }
}

/// Best restricted and unrestricted guesses for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionDiff {
    /// Value of the feedback pattern that leaves this bucket
    pub pattern: u8,
    /// Answers in the bucket
    pub size: usize,
    /// Best guess consistent with the pattern, if any guess word is
    pub constrained: Option<ScoredGuess>,
    /// Best guess from the whole list
    pub unconstrained: Option<ScoredGuess>,
}

impl PartitionDiff {
    #[must_use]
    pub const fn feedback(&self) -> Pattern {
        Pattern::new(self.pattern)
    }

    /// Bits of information given up by playing hard mode here
    #[must_use]
    pub fn cost(&self) -> f64 {
        let entropy = |guess: &Option<ScoredGuess>| guess.as_ref().map_or(0.0, |g| g.entropy);
        entropy(&self.unconstrained) - entropy(&self.constrained)
    }
}

/// Every bucket of one opening guess, in pattern order
#[derive(Debug, Clone, PartialEq)]
pub struct HardModeReport {
    pub opening: Word,
    pub partitions: Vec<PartitionDiff>,
    /// Buckets taken from the checkpoint rather than recomputed
    pub resumed: usize,
}

impl HardModeReport {
    /// Buckets where hard mode loses more than [`NOTABLE_COST`]
    pub fn notable(&self) -> impl Iterator<Item = &PartitionDiff> {
        self.partitions.iter().filter(|p| p.cost() > NOTABLE_COST)
    }

    /// Expected bits lost over a uniformly random answer
    #[must_use]
    pub fn expected_cost(&self) -> f64 {
        let answers: usize = self.partitions.iter().map(|p| p.size).sum();
        if answers == 0 {
            return 0.0;
        }
        self.partitions
            .iter()
            .map(|p| p.size as f64 * p.cost())
            .sum::<f64>()
            / answers as f64
    }
}

#[derive(Deserialize)]
struct SavedProgress {
    fingerprint: u64,
    opening: String,
    partitions: Vec<PartitionDiff>,
}

#[derive(Serialize)]
struct ProgressRef<'a> {
    fingerprint: u64,
    opening: &'a str,
    partitions: &'a [PartitionDiff],
}

/// Compare hard-mode and free guessing after `opening` for every bucket
///
/// With a `store`, finished buckets are saved every `policy.every` buckets and
/// once more at the end; a store written for the same lists and opening is
/// resumed, anything else is ignored.
pub fn compare_hard_mode(
    guesses: &[Word],
    answers: &[Word],
    opening: &Word,
    store: Option<&JsonCheckpoint>,
    policy: CheckpointPolicy,
    progress: &ProgressBar,
) -> HardModeReport {
    let fingerprint = corpus_fingerprint(guesses, answers);
    let mut partitions = store
        .map(|store| resume(store, fingerprint, opening))
        .unwrap_or_default();
    let resumed = partitions.len();
    let done: FxHashSet<u8> = partitions.iter().map(|p| p.pattern).collect();

    let answer_buckets = partition(opening, answers);
    let guess_buckets = partition(opening, guesses);
    let todo: Vec<Pattern> = Pattern::all()
        .filter(|p| !answer_buckets[p.index()].is_empty() && !done.contains(&p.value()))
        .collect();
    debug!("{} buckets to compare, {resumed} resumed", todo.len());

    progress.set_length((resumed + todo.len()) as u64);
    progress.set_position(resumed as u64);
    let every = policy.every.max(1);

    for (finished, pattern) in todo.into_iter().enumerate() {
        partitions.push(compare_bucket(
            pattern,
            &answer_buckets[pattern.index()],
            &guess_buckets[pattern.index()],
            guesses,
        ));
        progress.inc(1);

        if let Some(store) = store.filter(|_| (finished + 1) % every == 0) {
            save(store, fingerprint, opening, &partitions);
        }
    }

    partitions.sort_by_key(|p| p.pattern);
    if let Some(store) = store {
        save(store, fingerprint, opening, &partitions);
    }
    progress.finish_and_clear();

    HardModeReport {
        opening: opening.clone(),
        partitions,
        resumed,
    }
}

fn compare_bucket(
    pattern: Pattern,
    answers: &[&Word],
    allowed: &[&Word],
    guesses: &[Word],
) -> PartitionDiff {
    // A lone answer is simply played next
    if let [only] = answers {
        let lone = ScoredGuess::new(only, 0.0);
        return PartitionDiff {
            pattern: pattern.value(),
            size: 1,
            constrained: Some(lone.clone()),
            unconstrained: Some(lone),
        };
    }

    let diff = PartitionDiff {
        pattern: pattern.value(),
        size: answers.len(),
        constrained: select_best_guess(allowed, answers)
            .map(|(word, entropy)| ScoredGuess::new(word, entropy)),
        unconstrained: select_best_guess(guesses, answers)
            .map(|(word, entropy)| ScoredGuess::new(word, entropy)),
    };

    if diff.cost() > NOTABLE_COST {
        info!(
            "{} answers after {}: hard mode {:?} vs free {:?} (max {:.4} bits)",
            diff.size,
            pattern.to_emoji(),
            diff.constrained,
            diff.unconstrained,
            (diff.size as f64).log2()
        );
    }
    diff
}

fn resume(store: &JsonCheckpoint, fingerprint: u64, opening: &Word) -> Vec<PartitionDiff> {
    match store.read::<SavedProgress>() {
        Ok(None) => Vec::new(),
        Ok(Some(saved)) if saved.fingerprint == fingerprint && saved.opening == opening.text() => {
            saved.partitions
        }
        Ok(Some(_)) => {
            warn!(
                "{} belongs to other word lists or another opening; starting over",
                store.path().display()
            );
            Vec::new()
        }
        Err(e) => {
            warn!("{e}; starting over");
            Vec::new()
        }
    }
}

fn save(store: &JsonCheckpoint, fingerprint: u64, opening: &Word, partitions: &[PartitionDiff]) {
    let progress = ProgressRef {
        fingerprint,
        opening: opening.text(),
        partitions,
    };
    match store.write(&progress) {
        Ok(()) => debug!("checkpointed {} buckets", partitions.len()),
        Err(e) => warn!("failed to save hard-mode progress: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    const SMALL: &[&str] = &[
        "apple", "baker", "candy", "dolly", "event", "facet", "gates", "hairy", "igloo", "allow",
    ];

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn temp_store(label: &str) -> JsonCheckpoint {
        JsonCheckpoint::new(std::env::temp_dir().join(format!(
            "wordle_advisor_hard_{label}_{}.json",
            std::process::id()
        )))
    }

    fn run(
        guesses: &[Word],
        answers: &[Word],
        opening: &Word,
        store: Option<&JsonCheckpoint>,
    ) -> HardModeReport {
        compare_hard_mode(
            guesses,
            answers,
            opening,
            store,
            CheckpointPolicy::new(1),
            &ProgressBar::hidden(),
        )
    }

    #[test]
    fn free_guessing_never_loses() {
        let corpus = words_from_slice(SMALL);
        let report = run(&corpus, &corpus, &word("candy"), None);

        assert_eq!(
            report.partitions.iter().map(|p| p.size).sum::<usize>(),
            corpus.len()
        );
        assert!(report.partitions.windows(2).all(|w| w[0].pattern < w[1].pattern));
        for diff in &report.partitions {
            assert!(diff.cost() >= 0.0, "{diff:?}");
        }
        assert!(report.expected_cost() >= 0.0);
        assert_eq!(report.resumed, 0);
    }

    #[test]
    fn inconsistent_guess_can_split_better() {
        // abczy separates all three but shows a 'z' that the opening ruled out
        let answers = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);
        let guesses = words_from_slice(&["aaaaa", "bbbbb", "ccccc", "abczy"]);
        let report = run(&guesses, &answers, &word("zzzzz"), None);

        assert_eq!(report.partitions.len(), 1);
        let only = &report.partitions[0];
        assert_eq!(only.feedback(), Pattern::new(0));
        assert_eq!(only.size, 3);
        assert_eq!(only.constrained.as_ref().unwrap().word, "aaaaa");
        assert_eq!(only.unconstrained.as_ref().unwrap().word, "abczy");
        assert!((only.unconstrained.as_ref().unwrap().entropy - 3f64.log2()).abs() < 1e-12);
        assert!(only.cost() > 0.6);
        assert_eq!(report.notable().count(), 1);
        assert!((report.expected_cost() - only.cost()).abs() < 1e-12);
    }

    #[test]
    fn lone_answers_cost_nothing() {
        let corpus = words_from_slice(&["crane", "zzzzz"]);
        let report = run(&corpus, &corpus, &word("crane"), None);

        assert_eq!(report.partitions.len(), 2);
        assert!(report.partitions.iter().all(|p| p.size == 1 && p.cost() == 0.0));
        assert_eq!(report.notable().count(), 0);
    }

    #[test]
    fn resumes_finished_buckets() {
        let store = temp_store("resume");
        let corpus = words_from_slice(SMALL);
        let opening = word("candy");

        let fresh = run(&corpus, &corpus, &opening, Some(&store));

        // Doctor one saved bucket so a recomputation would be visible
        let mut doctored = fresh.partitions.clone();
        doctored[0].unconstrained = Some(ScoredGuess {
            word: "sentinel".to_string(),
            entropy: 42.0,
        });
        store
            .write(&ProgressRef {
                fingerprint: corpus_fingerprint(&corpus, &corpus),
                opening: opening.text(),
                partitions: &doctored,
            })
            .unwrap();

        let resumed = run(&corpus, &corpus, &opening, Some(&store));
        let _ = std::fs::remove_file(store.path());

        assert_eq!(resumed.resumed, fresh.partitions.len());
        assert_eq!(resumed.partitions, doctored);
    }

    #[test]
    fn progress_from_another_opening_is_ignored() {
        let store = temp_store("stale");
        let corpus = words_from_slice(SMALL);

        run(&corpus, &corpus, &word("candy"), Some(&store));
        let other = run(&corpus, &corpus, &word("gates"), Some(&store));
        let _ = std::fs::remove_file(store.path());

        assert_eq!(other.resumed, 0);
        assert_eq!(other.opening, word("gates"));
    }

    #[test]
    fn partial_progress_is_completed() {
        let store = temp_store("partial");
        let corpus = words_from_slice(SMALL);
        let opening = word("facet");

        let full = run(&corpus, &corpus, &opening, None);
        store
            .write(&ProgressRef {
                fingerprint: corpus_fingerprint(&corpus, &corpus),
                opening: opening.text(),
                partitions: &full.partitions[..1],
            })
            .unwrap();

        let finished = run(&corpus, &corpus, &opening, Some(&store));
        let _ = std::fs::remove_file(store.path());

        assert_eq!(finished.resumed, 1);
        assert_eq!(finished.partitions, full.partitions);
    }
}

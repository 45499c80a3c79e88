//! Word analysis command
//!
//! Scores a single guess word against the possible answers.

use crate::core::{Pattern, Word};
use crate::solver::entropy::{calculate_metrics, max_entropy, pattern_counts};
use crate::wordlists::Corpus;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub max_entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    /// Distinct feedback patterns the word can produce against the answers
    pub patterns_seen: usize,
    /// Largest buckets, biggest first
    pub largest_buckets: Vec<(Pattern, usize)>,
    pub total_candidates: usize,
}

/// Analyze the entropy of a guess word against `answers`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the guess list
pub fn analyze_word(
    word: &str,
    guesses: &Corpus,
    answers: &[Word],
) -> Result<AnalysisResult> {
    let parsed = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let Some(word) = guesses.find(parsed.text()) else {
        bail!("word '{parsed}' is not in the word list");
    };

    let candidates = answers;
    let metrics = calculate_metrics(word, candidates);

    let mut largest_buckets: Vec<(Pattern, usize)> = Pattern::all()
        .zip(pattern_counts(word, candidates))
        .filter(|&(_, count)| count > 0)
        .collect();
    let patterns_seen = largest_buckets.len();
    largest_buckets.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    largest_buckets.truncate(5);

    let expected_reduction = metrics.entropy.exp2();
    Ok(AnalysisResult {
        word: word.clone(),
        entropy: metrics.entropy,
        max_entropy: max_entropy(candidates.len()),
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        patterns_seen,
        largest_buckets,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn corpus() -> Corpus {
        Corpus::new(words_from_slice(&[
            "apple", "baker", "candy", "dolly", "event", "facet", "gates", "hairy", "igloo",
            "allow",
        ]))
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let corpus = corpus();
        let result = analyze_word("CANDY", &corpus, corpus.words()).unwrap();

        assert_eq!(result.word.text(), "candy");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 10);
    }

    #[test]
    fn analyze_unknown_word() {
        let corpus = corpus();
        assert!(analyze_word("zzzzz", &corpus, corpus.words()).is_err());
        assert!(analyze_word("toolong", &corpus, corpus.words()).is_err());
    }

    #[test]
    fn entropy_properties() {
        let corpus = corpus();
        let result = analyze_word("facet", &corpus, corpus.words()).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= result.max_entropy);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= 10.0);
        assert!(result.patterns_seen >= 2);
        assert_eq!(result.largest_buckets[0].1, result.max_partition);
        assert!(result.largest_buckets.len() <= 5);
    }

    #[test]
    fn guess_is_scored_against_the_answers() {
        let guesses =
            Corpus::new(words_from_slice(&["aaaaa", "bbbbb", "ccccc", "abcde"])).unwrap();
        let answers = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);
        let result = analyze_word("abcde", &guesses, &answers).unwrap();

        assert_eq!(result.total_candidates, 3);
        assert!((result.entropy - 3f64.log2()).abs() < 1e-12);
        assert_eq!(result.patterns_seen, 3);
        assert_eq!(result.max_partition, 1);
    }
}

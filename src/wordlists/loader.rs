//! Word list loading utilities
//!
//! Provides functions to build a corpus from files or string slices.

use crate::core::Word;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce a usable corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("no five-letter words available; nothing to solve")]
    Empty,
    #[error("could not read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ordered, duplicate-free, non-empty list of five-letter words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus, dropping repeated words (first occurrence wins)
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no words remain.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, CorpusError> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { words })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed corpus
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by text, case-insensitively
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

/// Load a corpus from a whitespace-delimited word file
///
/// Entries that are not five ASCII letters are skipped.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or
/// `CorpusError::Empty` if it holds no five-letter words.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::load_from_file;
///
/// let corpus = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = Corpus::new(parse_words(&content))?;
    info!(
        "loaded {} five-letter words from {}",
        corpus.len(),
        path.display()
    );
    Ok(corpus)
}

/// Extract the five-letter words from whitespace-delimited text
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .split_whitespace()
        .filter_map(|token| {
            let word = Word::new(token).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} entries that are not five-letter words");
    }
    words
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_handles_mixed_whitespace() {
        let words = parse_words("crane\nSLATE  it\r\nbananas\tirate\n\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn corpus_removes_duplicates_in_order() {
        let corpus = Corpus::new(words_from_slice(&["slate", "crane", "SLATE", "irate"])).unwrap();
        let texts: Vec<&str> = corpus.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn empty_corpus_is_an_error() {
        assert!(matches!(Corpus::new(Vec::new()), Err(CorpusError::Empty)));
        assert!(matches!(
            Corpus::new(parse_words("a an the toolong")),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn corpus_find_is_case_insensitive() {
        let corpus = Corpus::new(words_from_slice(&["crane", "slate"])).unwrap();
        assert_eq!(corpus.find("SLATE").map(Word::text), Some("slate"));
        assert!(corpus.find("zzzzz").is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_advisor_no_such_word_list.txt");
        assert!(matches!(
            load_from_file(&path),
            Err(CorpusError::Io { .. })
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_advisor_words_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane slate\nirate\nxyz\n").unwrap();

        let corpus = load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(corpus.len(), 3);
    }
}

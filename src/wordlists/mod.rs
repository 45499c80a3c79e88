//! Word corpus loading
//!
//! The corpus is read once at startup and stays read-only for the rest of the
//! run. Only exactly-five-letter alphabetic entries are kept.

pub mod loader;

pub use loader::{Corpus, CorpusError, load_from_file, parse_words, words_from_slice};

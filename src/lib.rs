//! Wordle Advisor
//!
//! Recommends five-letter guesses that maximize the expected information gained
//! from feedback, and narrows the candidates as constraints come in.
//!
//! # Quick Start
//!
//! ```rust
//! use indicatif::ProgressBar;
//! use wordle_advisor::solver::{Outcome, Session, SessionConfig};
//! use wordle_advisor::wordlists::{Corpus, words_from_slice};
//!
//! let corpus = Corpus::new(words_from_slice(&["crane", "slate", "irate", "trace"])).unwrap();
//! let mut session = Session::new(corpus, SessionConfig::default());
//!
//! let first = session.first_guess(&ProgressBar::hidden()).unwrap();
//! println!("Try {} ({:.3} bits)", first.guess, first.entropy());
//!
//! // 's' is in the first position
//! let outcome = session.submit("s1").unwrap();
//! assert_eq!(outcome, Outcome::Solved(wordle_advisor::core::Word::new("slate").unwrap()));
//! ```

// Core domain types
pub mod core;

// Scoring and the advisor session
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

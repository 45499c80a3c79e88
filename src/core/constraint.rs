//! Feedback constraints and candidate filtering
//!
//! A constraint string is a run of `(letter, digit)` pairs such as `t1e2a2r3s3`.
//! The k-th pair describes position k of the guess; the digit is 1 (exact),
//! 2 (present elsewhere) or 3 (absent).

use super::feedback::FeedbackClass;
use super::pattern::Pattern;
use super::word::{WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// One piece of observed feedback: `letter` produced `class` at `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintPredicate {
    pub letter: u8,
    pub class: FeedbackClass,
    pub position: usize,
}

/// Malformed constraint input; recoverable by asking again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("constraint string has odd length {0}; expected letter/digit pairs like t1e2a2r3s3")]
    OddLength(usize),
    #[error("expected a letter at offset {offset}, found {found:?}")]
    NotALetter { offset: usize, found: char },
    #[error("expected feedback digit 1, 2 or 3 at offset {offset}, found {found:?}")]
    BadDigit { offset: usize, found: char },
    #[error("{0} letter/digit pairs given, but a word has only 5 positions")]
    TooManyPairs(usize),
}

impl ConstraintPredicate {
    #[must_use]
    pub const fn new(letter: u8, class: FeedbackClass, position: usize) -> Self {
        Self {
            letter,
            class,
            position,
        }
    }

    /// Whether `word` could still be the secret given this feedback
    #[inline]
    #[must_use]
    pub const fn is_satisfied_by(&self, word: &Word) -> bool {
        self.class.admits(word, self.letter, self.position)
    }

    /// The five predicates a guess yields once `pattern` is observed
    #[must_use]
    pub fn from_feedback(guess: &Word, pattern: Pattern) -> [Self; WORD_LEN] {
        std::array::from_fn(|position| {
            Self::new(guess.char_at(position), pattern.class_at(position), position)
        })
    }

    /// Constraint digit: 1 exact, 2 present, 3 absent
    const fn digit(&self) -> char {
        match self.class {
            FeedbackClass::ExactPosition => '1',
            FeedbackClass::PresentWrongPosition => '2',
            FeedbackClass::Absent => '3',
        }
    }
}

impl fmt::Display for ConstraintPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(self.letter), self.digit())
    }
}

/// Parse a constraint string into predicates, in input order
///
/// Letters are case-normalized. An empty string yields no predicates.
///
/// # Errors
/// Returns `ConstraintError` on odd length, a non-letter in a letter slot, a
/// digit outside 1-3, or more than five pairs.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{FeedbackClass, parse_constraints};
///
/// let predicates = parse_constraints("t1e2a2r3s3").unwrap();
/// assert_eq!(predicates.len(), 5);
/// assert_eq!(predicates[0].letter, b't');
/// assert_eq!(predicates[0].class, FeedbackClass::ExactPosition);
/// assert_eq!(predicates[4].position, 4);
///
/// assert!(parse_constraints("t1e").is_err());
/// assert!(parse_constraints("t4").is_err());
/// ```
pub fn parse_constraints(input: &str) -> Result<Vec<ConstraintPredicate>, ConstraintError> {
    let chars: Vec<char> = input.chars().collect();

    if chars.len() % 2 != 0 {
        return Err(ConstraintError::OddLength(chars.len()));
    }

    let pairs = chars.len() / 2;
    if pairs > WORD_LEN {
        return Err(ConstraintError::TooManyPairs(pairs));
    }

    chars
        .chunks_exact(2)
        .enumerate()
        .map(|(position, pair)| {
            let (letter, digit) = (pair[0], pair[1]);
            let offset = position * 2;

            if !letter.is_ascii_alphabetic() {
                return Err(ConstraintError::NotALetter {
                    offset,
                    found: letter,
                });
            }

            let class = match digit {
                '1' => FeedbackClass::ExactPosition,
                '2' => FeedbackClass::PresentWrongPosition,
                '3' => FeedbackClass::Absent,
                found => {
                    return Err(ConstraintError::BadDigit {
                        offset: offset + 1,
                        found,
                    });
                }
            };

            Ok(ConstraintPredicate::new(
                letter.to_ascii_lowercase() as u8,
                class,
                position,
            ))
        })
        .collect()
}

/// Keep the words that satisfy every predicate
///
/// Order of `candidates` is preserved, so filtering a subsequence of the corpus
/// yields a subsequence of the corpus.
#[must_use]
pub fn filter_candidates(candidates: &[Word], predicates: &[ConstraintPredicate]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| predicates.iter().all(|p| p.is_satisfied_by(word)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn parse_example_string() {
        let predicates = parse_constraints("t1e2a2r3s3").unwrap();
        let expected = [
            ConstraintPredicate::new(b't', FeedbackClass::ExactPosition, 0),
            ConstraintPredicate::new(b'e', FeedbackClass::PresentWrongPosition, 1),
            ConstraintPredicate::new(b'a', FeedbackClass::PresentWrongPosition, 2),
            ConstraintPredicate::new(b'r', FeedbackClass::Absent, 3),
            ConstraintPredicate::new(b's', FeedbackClass::Absent, 4),
        ];
        assert_eq!(predicates, expected);
    }

    #[test]
    fn parse_empty_is_no_predicates() {
        assert_eq!(parse_constraints(""), Ok(vec![]));
    }

    #[test]
    fn parse_partial_and_uppercase() {
        let predicates = parse_constraints("A1").unwrap();
        assert_eq!(
            predicates,
            [ConstraintPredicate::new(b'a', FeedbackClass::ExactPosition, 0)]
        );
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_constraints("t1e"), Err(ConstraintError::OddLength(3)));
        assert_eq!(
            parse_constraints("t1e4"),
            Err(ConstraintError::BadDigit {
                offset: 3,
                found: '4'
            })
        );
        assert_eq!(
            parse_constraints("t0"),
            Err(ConstraintError::BadDigit {
                offset: 1,
                found: '0'
            })
        );
        assert_eq!(
            parse_constraints("11"),
            Err(ConstraintError::NotALetter {
                offset: 0,
                found: '1'
            })
        );
        assert_eq!(
            parse_constraints("a1b2c3d1e2f3"),
            Err(ConstraintError::TooManyPairs(6))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let predicates = parse_constraints("t1e2a2r3s3").unwrap();
        let rendered: String = predicates.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, "t1e2a2r3s3");
    }

    #[test]
    fn filter_exact_position() {
        let corpus = words(&["apple", "baker", "candy", "allow", "facet", "gates"]);
        let predicates = parse_constraints("a1").unwrap();
        let filtered = filter_candidates(&corpus, &predicates);
        assert_eq!(texts(&filtered), ["apple", "allow"]);
    }

    #[test]
    fn filter_present_wrong_position() {
        let corpus = words(&["apple", "baker", "candy", "allow", "facet", "gates"]);
        // 'a' somewhere, but not at position 1
        let predicates = [ConstraintPredicate::new(
            b'a',
            FeedbackClass::PresentWrongPosition,
            1,
        )];
        let filtered = filter_candidates(&corpus, &predicates);
        assert_eq!(texts(&filtered), ["apple", "allow"]);
    }

    #[test]
    fn filter_absent_is_letter_global() {
        let corpus = words(&["apple", "baker", "candy", "igloo", "event"]);
        // 'e' anchored at position 4, but rejects any word containing 'e'
        let predicates = parse_constraints("x3j3z3q3e3").unwrap();
        let filtered = filter_candidates(&corpus, &predicates);
        assert_eq!(texts(&filtered), ["candy", "igloo"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let corpus = words(&["apple", "baker", "candy", "allow", "facet", "gates"]);
        let predicates = parse_constraints("a2e3").unwrap();
        let once = filter_candidates(&corpus, &predicates);
        let twice = filter_candidates(&once, &predicates);
        assert_eq!(once, twice);
    }

    #[test]
    fn more_predicates_never_grow_the_set() {
        let corpus = words(&["apple", "baker", "candy", "allow", "facet", "gates"]);
        let base = parse_constraints("a2").unwrap();
        let mut extended = base.clone();
        extended.extend(parse_constraints("x3y3t3").unwrap());

        let narrow = filter_candidates(&corpus, &base);
        let narrower = filter_candidates(&corpus, &extended);
        assert!(narrower.iter().all(|w| narrow.contains(w)));
        assert!(narrower.len() <= narrow.len());
    }

    #[test]
    fn feedback_predicates_select_matching_secrets() {
        let corpus = words(&["crane", "slate", "nacre", "trace", "zzzzz", "eerie"]);
        let guess = Word::new("crane").unwrap();
        for secret in &corpus {
            let pattern = Pattern::simulate(&guess, secret);
            let predicates = ConstraintPredicate::from_feedback(&guess, pattern);
            let survivors = filter_candidates(&corpus, &predicates);
            let expected: Vec<Word> = corpus
                .iter()
                .filter(|w| Pattern::simulate(&guess, w) == pattern)
                .cloned()
                .collect();
            assert_eq!(survivors, expected);
            assert!(survivors.contains(secret));
        }
    }
}

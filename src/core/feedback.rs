//! Per-position feedback classification
//!
//! The feedback model is positional and existential only: a guess letter that is not an
//! exact match is "present" whenever it occurs anywhere in the secret. There is no
//! per-letter budget, so repeated guess letters can all be marked present even if
//! the secret holds that letter only once.

use super::Word;

/// Outcome of comparing one guess letter against a hypothetical secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackClass {
    /// Letter sits at exactly this position in the secret (green)
    ExactPosition,
    /// Letter occurs in the secret, but not at this position (yellow)
    PresentWrongPosition,
    /// Letter does not occur in the secret at all (gray)
    Absent,
}

impl FeedbackClass {
    /// All classes, in constraint-digit order (1, 2, 3)
    pub const ALL: [Self; 3] = [
        Self::ExactPosition,
        Self::PresentWrongPosition,
        Self::Absent,
    ];

    /// Base-3 digit used by `Pattern` (gray = 0, yellow = 1, green = 2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::PresentWrongPosition => 1,
            Self::ExactPosition => 2,
        }
    }

    /// Inverse of [`FeedbackClass::digit`]
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::PresentWrongPosition),
            2 => Some(Self::ExactPosition),
            _ => None,
        }
    }

    /// Whether `word` is consistent with `letter` having produced this class at
    /// `position`
    ///
    /// `Absent` is letter-global: it ignores the position entirely.
    #[inline]
    #[must_use]
    pub const fn admits(self, word: &Word, letter: u8, position: usize) -> bool {
        match self {
            Self::ExactPosition => word.char_at(position) == letter,
            Self::PresentWrongPosition => {
                word.char_at(position) != letter && word.has_letter(letter)
            }
            Self::Absent => !word.has_letter(letter),
        }
    }
}

/// Classify `guess_letter` at `position` against a hypothetical `secret`
///
/// # Examples
/// ```
/// use wordle_advisor::core::{FeedbackClass, Word, classify};
///
/// let secret = Word::new("slate").unwrap();
/// assert_eq!(classify(b's', 0, &secret), FeedbackClass::ExactPosition);
/// assert_eq!(classify(b'e', 0, &secret), FeedbackClass::PresentWrongPosition);
/// assert_eq!(classify(b'z', 0, &secret), FeedbackClass::Absent);
/// ```
#[inline]
#[must_use]
pub const fn classify(guess_letter: u8, position: usize, secret: &Word) -> FeedbackClass {
    if secret.char_at(position) == guess_letter {
        FeedbackClass::ExactPosition
    } else if secret.has_letter(guess_letter) {
        FeedbackClass::PresentWrongPosition
    } else {
        FeedbackClass::Absent
    }
}

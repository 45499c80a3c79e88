//! Feedback pattern representation and enumeration
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (`Absent`)
//! - 1 = Yellow (`PresentWrongPosition`)
//! - 2 = Green (`ExactPosition`)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::feedback::{FeedbackClass, classify};
use super::word::{WORD_LEN, Word};

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback pattern for a guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!((value as usize) < PATTERN_COUNT, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into a 243-slot distribution
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Every pattern exactly once, in ascending value order
    ///
    /// This is the full outcome space of a single guess: the Cartesian product of
    /// the three feedback classes over five positions.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// assert_eq!(Pattern::all().count(), 243);
    /// assert_eq!(Pattern::all().last(), Some(Pattern::PERFECT));
    /// ```
    pub fn all() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator + Clone {
        (0..PATTERN_COUNT as u8).map(Self)
    }

    /// Build a pattern from per-position classes
    #[must_use]
    pub fn from_classes(classes: [FeedbackClass; WORD_LEN]) -> Self {
        let value = classes
            .iter()
            .rev()
            .fold(0u8, |acc, class| acc * 3 + class.digit());
        Self(value)
    }

    /// Feedback class at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn class_at(self, position: usize) -> FeedbackClass {
        assert!(position < WORD_LEN, "position {position} out of range");
        let digit = (self.0 / 3u8.pow(position as u32)) % 3;
        // digit is always 0..3
        FeedbackClass::from_digit(digit).unwrap_or(FeedbackClass::Absent)
    }

    /// Per-position classes
    #[must_use]
    pub fn classes(self) -> [FeedbackClass; WORD_LEN] {
        std::array::from_fn(|position| self.class_at(position))
    }

    /// Calculate the pattern `guess` produces when `secret` is the target
    ///
    /// Each position is classified independently with [`classify`].
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::simulate(&guess, &secret);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, secret: &Word) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for (position, &letter) in guess.chars().iter().enumerate() {
            pattern += classify(letter, position, secret).digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Whether `guess` would produce exactly this pattern against `secret`
    #[must_use]
    pub fn matches(self, guess: &Word, secret: &Word) -> bool {
        guess
            .chars()
            .iter()
            .enumerate()
            .all(|(position, &letter)| classify(letter, position, secret) == self.class_at(position))
    }

    /// Convert pattern to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" representing the pattern.
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.classes()
            .iter()
            .map(|class| match class {
                FeedbackClass::ExactPosition => '🟩',
                FeedbackClass::PresentWrongPosition => '🟨',
                FeedbackClass::Absent => '⬜',
            })
            .collect()
    }
}

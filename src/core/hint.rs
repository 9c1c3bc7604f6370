//! Feedback computation and representation
//!
//! A hint holds one [`Mark`] per letter position. On the wire (and in the
//! verbose log) it is written with the harness alphabet:
//! - `o` = Exact (right letter, right position)
//! - `_` = Present (letter occurs somewhere in the secret)
//! - `x` = Absent (letter does not occur in the secret)
//!
//! # Duplicate letters
//!
//! The default [`FeedbackPolicy::Simplified`] does not consume letters: a
//! guess letter that occurs anywhere in the secret is marked Present even
//! if every occurrence was already matched. Guessing `geese` against
//! `plate` therefore gives `x__xo`, where the official game would answer
//! `xxxxo`. [`FeedbackPolicy::Canonical`] implements the official
//! letter-count rule for callers that need it. The two only differ when the
//! guess repeats a letter.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Harness wire symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'o',
            Self::Present => '_',
            Self::Absent => 'x',
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a mark from the wire alphabet or the usual G/Y/- shorthands
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'o' | 'O' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            '_' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'x' | 'X' | '-' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// How repeated guess letters are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackPolicy {
    /// Any letter found in the secret is Present, without consuming it
    #[default]
    Simplified,
    /// Official Wordle rules: each secret letter satisfies at most one mark
    Canonical,
}

impl FeedbackPolicy {
    /// Compute the hint for `guess` against `secret` under this policy
    #[must_use]
    pub fn evaluate(self, secret: &Word, guess: &Word) -> Hint {
        Hint::calculate(secret, guess, self)
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint([Mark; WORD_LENGTH]);

impl Hint {
    /// All positions exact (the winning hint)
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// Build a hint from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Compute the hint with the default (simplified) policy
    ///
    /// # Examples
    /// ```
    /// use wordle_harness::core::{Hint, Word};
    ///
    /// let secret = Word::new("plate").unwrap();
    /// let guess = Word::new("geese").unwrap();
    /// assert_eq!(Hint::evaluate(&secret, &guess).to_string(), "x__xo");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        Self::calculate(secret, guess, FeedbackPolicy::Simplified)
    }

    /// Compute the hint for `guess` when `secret` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact position match
    /// 2. Second pass: for the remaining positions, mark Present when the
    ///    letter is still available in the secret, otherwise Absent. Under
    ///    the simplified policy every letter of the secret stays available.
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word, policy: FeedbackPolicy) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = match policy {
            FeedbackPolicy::Simplified => None,
            FeedbackPolicy::Canonical => Some(secret.char_counts()),
        };

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *mark = Mark::Exact;
                if let Some(count) = available.as_mut().and_then(|pool| pool.get_mut(&letter)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Exact {
                continue;
            }
            let letter = guess.char_at(i);
            let present = match available.as_mut() {
                None => secret.has_letter(letter),
                Some(pool) => match pool.get_mut(&letter) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        true
                    }
                    _ => false,
                },
            };
            if present {
                *mark = Mark::Present;
            }
        }

        Self(marks)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions with the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert the hint to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Hint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<Mark> = s
            .chars()
            .map(Mark::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid hint string: {s}"))?;

        let marks: [Mark; WORD_LENGTH] = marks
            .try_into()
            .map_err(|_| format!("Hint must have {WORD_LENGTH} marks: {s}"))?;

        Ok(Self(marks))
    }
}

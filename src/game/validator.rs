//! Guess validation
//!
//! Checks the shape and dictionary membership of a solver's guess before
//! it is scored.

use crate::core::{WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use std::fmt;

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGuess {
    /// Not exactly five characters after normalization
    WrongLength(usize),
    /// Contains something other than letters
    NonAlphabetic,
    /// Well-formed but not a dictionary word
    NotInDictionary,
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "Guess must be a {WORD_LENGTH} letter sequence, got {len} characters"
            ),
            Self::NonAlphabetic => write!(f, "Guess must be a {WORD_LENGTH} letter sequence"),
            Self::NotInDictionary => write!(f, "Guess must be a valid english word"),
        }
    }
}

impl std::error::Error for InvalidGuess {}

/// Normalize a raw guess: trim surrounding whitespace and lower-case it
#[must_use]
pub fn normalize(guess: &str) -> String {
    guess.trim().to_lowercase()
}

/// Validate a raw guess against the dictionary
///
/// Checks run in order and the first failure wins: length, letters only,
/// dictionary membership. On success the dictionary's own word is returned.
///
/// # Errors
///
/// Returns the first `InvalidGuess` reason that applies.
///
/// # Examples
/// ```
/// use wordle_harness::dictionary::Dictionary;
/// use wordle_harness::game::{InvalidGuess, validate};
///
/// let dictionary = Dictionary::from_slice(&["hello"]).unwrap();
/// assert!(validate(" HELLO\n", &dictionary).is_ok());
/// assert_eq!(validate("hell", &dictionary), Err(InvalidGuess::WrongLength(4)));
/// assert_eq!(validate("world", &dictionary), Err(InvalidGuess::NotInDictionary));
/// ```
pub fn validate<'d>(guess: &str, dictionary: &'d Dictionary) -> Result<&'d Word, InvalidGuess> {
    let normalized = normalize(guess);

    let len = normalized.chars().count();
    if len != WORD_LENGTH {
        return Err(InvalidGuess::WrongLength(len));
    }

    if !normalized.chars().all(char::is_alphabetic) {
        return Err(InvalidGuess::NonAlphabetic);
    }

    dictionary
        .get(&normalized)
        .ok_or(InvalidGuess::NotInDictionary)
}

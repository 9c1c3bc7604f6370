//! Game dictionary
//!
//! The set of valid words, loaded once per process and shared read-only by
//! the validator, the session driver (secret draws) and the solver.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;

pub use loader::load_from_file;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be opened or read
    Io(io::Error),
    /// The word list contained no valid 5-letter words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Immutable list of valid words with constant-time membership lookup
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from words, dropping duplicates but keeping order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut list = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), list.len());
                list.push(word);
            }
        }

        if list.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words: list, index })
    }

    /// Build a dictionary from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if none of the entries is a valid word.
    pub fn from_slice(slice: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(slice.iter().filter_map(|s| Word::new(s.trim()).ok()))
    }

    /// Look up a normalized (lower-case) word
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    /// Check whether a normalized word is in the dictionary
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a word uniformly at random
    ///
    /// Never returns `None` for a constructed dictionary, which is non-empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let dictionary = Dictionary::from_slice(&["crane", "toolong", "abc", " SLATE "]).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("slate"));
        assert!(!dictionary.contains("abc"));
    }

    #[test]
    fn dictionary_drops_duplicates() {
        let dictionary = Dictionary::from_slice(&["crane", "CRANE", "slate"]).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "crane");
        assert_eq!(dictionary.words()[1].text(), "slate");
    }

    #[test]
    fn dictionary_empty_is_error() {
        assert!(matches!(
            Dictionary::from_slice(&[]),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_slice(&["nope", "123"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn dictionary_get_returns_word() {
        let dictionary = Dictionary::from_slice(&["crane"]).unwrap();
        assert_eq!(dictionary.get("crane").map(Word::text), Some("crane"));
        assert!(dictionary.get("CRANE").is_none());
    }

    #[test]
    fn dictionary_choose_draws_member() {
        let dictionary = Dictionary::from_slice(&["crane", "slate", "irate"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = dictionary.choose(&mut rng).unwrap();
            assert!(dictionary.contains(word.text()));
        }
    }

    #[test]
    fn dictionary_choose_is_reproducible_with_seed() {
        let dictionary = Dictionary::from_slice(&["crane", "slate", "irate", "grate"]).unwrap();
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| dictionary.choose(&mut rng).unwrap().text().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
    }
}

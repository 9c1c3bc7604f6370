//! Word list loading
//!
//! Reads newline-delimited word lists from disk.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// Each line is trimmed and lower-cased. Blank lines are ignored and lines
/// that are not 5-letter alphabetic words are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read, and
/// `DictionaryError::Empty` if it holds no usable word.
///
/// # Examples
/// ```no_run
/// use wordle_harness::dictionary::load_from_file;
///
/// let dictionary = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_word_list(&content)
}

/// Parse the contents of a word list
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if no line is a usable word.
pub fn parse_word_list(content: &str) -> Result<Dictionary, DictionaryError> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("Skipping dictionary entry {line:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {skipped} invalid dictionary entries");
    }

    Dictionary::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_harness_{}_{name}", std::process::id()))
    }

    #[test]
    fn parse_word_list_trims_and_normalizes() {
        let dictionary = parse_word_list("crane\n  Slate \r\n\nirate\n").unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("slate"));
    }

    #[test]
    fn parse_word_list_skips_invalid_lines() {
        let dictionary = parse_word_list("crane\ntoolong\nab1de\nslate").unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn parse_word_list_empty_is_error() {
        assert!(matches!(parse_word_list(""), Err(DictionaryError::Empty)));
        assert!(matches!(
            parse_word_list("\n\n  \n"),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_path("words.txt");
        fs::write(&path, "crane\nslate\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "crane");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let path = temp_path("does_not_exist.txt");
        assert!(matches!(load_from_file(&path), Err(DictionaryError::Io(_))));
    }
}

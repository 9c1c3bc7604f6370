//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod hint;
mod word;

pub use hint::{FeedbackPolicy, Hint, Mark};
pub use word::{WORD_LENGTH, Word, WordError};

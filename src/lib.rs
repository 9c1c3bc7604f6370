//! Wordle Harness
//!
//! Plays Wordle against a pluggable guessing strategy and scores it over
//! many randomly chosen secret words.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_harness::core::FeedbackPolicy;
//! use wordle_harness::dictionary::Dictionary;
//! use wordle_harness::game::{SessionConfig, run_session};
//! use wordle_harness::solver::NarrowingSolver;
//!
//! let dictionary = Dictionary::from_slice(&["crane", "slate", "irate", "grate"]).unwrap();
//! let mut solver = NarrowingSolver::new(FeedbackPolicy::Simplified);
//! let config = SessionConfig { games: 10, ..SessionConfig::default() };
//!
//! let report = run_session(&dictionary, &mut solver, &config, &mut StdRng::seed_from_u64(1));
//! assert_eq!(report.games, 10);
//! assert_eq!(report.disqualifications, 0);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Guessing strategies
pub mod solver;

// Rounds, sessions and statistics
pub mod game;

// Terminal output formatting
pub mod output;

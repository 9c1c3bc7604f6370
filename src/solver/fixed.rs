//! Constant-answer solver

use super::{Solver, SolverContext};
use crate::core::Hint;

/// Always guesses the same word
///
/// This is the bootstrap solver: it wins only when the secret happens to be
/// its word, and is mostly useful to exercise the harness.
#[derive(Debug, Clone)]
pub struct FixedSolver {
    word: String,
}

impl FixedSolver {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

impl Default for FixedSolver {
    fn default() -> Self {
        Self::new("hello")
    }
}

impl Solver for FixedSolver {
    type State = ();

    fn request_guess(
        &mut self,
        _context: &mut SolverContext<'_, ()>,
        _attempt_index: usize,
        _previous: Option<&Hint>,
    ) -> String {
        self.word.clone()
    }
}

//! Pluggable guessing strategies
//!
//! The engine only talks to the [`Solver`] trait. A solver keeps its
//! per-process state inside a [`SolverContext`], which the engine creates
//! once and hands back on every call without looking inside.

mod fixed;
mod narrowing;

pub use fixed::FixedSolver;
pub use narrowing::{NarrowingSolver, NarrowingState};

use crate::core::Hint;
use crate::dictionary::Dictionary;

/// State bag passed to every solver call
///
/// Holds a read-only handle to the game dictionary next to the solver's own
/// state. The engine never resets `state`; only the solver's
/// [`Solver::begin_round`] hook does.
#[derive(Debug)]
pub struct SolverContext<'d, T> {
    dictionary: &'d Dictionary,
    state: T,
}

impl<'d, T> SolverContext<'d, T> {
    pub const fn new(dictionary: &'d Dictionary, state: T) -> Self {
        Self { dictionary, state }
    }

    /// The dictionary every guess is checked against
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub const fn state(&self) -> &T {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    pub fn into_state(self) -> T {
        self.state
    }
}

/// A strategy that produces guesses for the harness
pub trait Solver {
    /// Solver-owned state kept in the context across rounds
    type State: Default;

    /// Called once per process before the first round
    ///
    /// Returns how many times each secret word is played. Zero is treated
    /// as one.
    fn setup(&mut self, _context: &mut SolverContext<'_, Self::State>) -> usize {
        1
    }

    /// Called before every round so the solver can reset per-round state
    fn begin_round(&mut self, _context: &mut SolverContext<'_, Self::State>, _iteration: usize) {}

    /// Produce the guess for attempt number `attempt_index`
    ///
    /// The index is 0-based like the iteration passed to `begin_round`.
    /// `previous` is the hint for the previous attempt, `None` on the first.
    fn request_guess(
        &mut self,
        context: &mut SolverContext<'_, Self::State>,
        attempt_index: usize,
        previous: Option<&Hint>,
    ) -> String;
}

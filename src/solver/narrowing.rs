//! Candidate-narrowing solver
//!
//! Keeps every dictionary word that would have produced the hints seen so
//! far this round and guesses one of them.

use super::{Solver, SolverContext};
use crate::core::{FeedbackPolicy, Hint, Word};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Per-round narrowing state
#[derive(Debug, Default)]
pub struct NarrowingState {
    /// Indices into the dictionary still consistent with every hint
    candidates: Vec<usize>,
    last_guess: Option<Word>,
}

impl NarrowingState {
    /// Number of words still consistent with this round's hints
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

/// Guesses the first (or a random) word consistent with all hints so far
///
/// The policy must match the one the harness scores with, otherwise the
/// secret can be filtered out.
#[derive(Debug)]
pub struct NarrowingSolver {
    policy: FeedbackPolicy,
    iterations: usize,
    rng: Option<StdRng>,
}

impl NarrowingSolver {
    /// Create a deterministic solver that always takes the first candidate
    #[must_use]
    pub const fn new(policy: FeedbackPolicy) -> Self {
        Self {
            policy,
            iterations: 1,
            rng: None,
        }
    }

    /// Pick uniformly among candidates instead of taking the first one
    ///
    /// A seed makes the picks reproducible.
    #[must_use]
    pub fn randomized(mut self, seed: Option<u64>) -> Self {
        self.rng = Some(seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64));
        self
    }

    /// Number of iterations reported from `setup`
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Solver for NarrowingSolver {
    type State = NarrowingState;

    fn setup(&mut self, context: &mut SolverContext<'_, NarrowingState>) -> usize {
        log::debug!(
            "Narrowing solver ready with {} words",
            context.dictionary().len()
        );
        self.iterations
    }

    fn begin_round(&mut self, context: &mut SolverContext<'_, NarrowingState>, _iteration: usize) {
        let size = context.dictionary().len();
        let state = context.state_mut();
        state.candidates.clear();
        state.candidates.extend(0..size);
        state.last_guess = None;
    }

    fn request_guess(
        &mut self,
        context: &mut SolverContext<'_, NarrowingState>,
        _attempt_index: usize,
        previous: Option<&Hint>,
    ) -> String {
        let words = context.dictionary().words();
        let state = context.state_mut();

        if let (Some(hint), Some(last)) = (previous, state.last_guess.take()) {
            let policy = self.policy;
            state
                .candidates
                .retain(|&i| Hint::calculate(&words[i], &last, policy) == *hint);
        }

        let pick = match self.rng.as_mut() {
            Some(rng) => state.candidates.choose(rng).copied(),
            None => state.candidates.first().copied(),
        };

        let Some(guess) = pick.and_then(|i| words.get(i)).or_else(|| words.first()) else {
            return String::new();
        };

        state.last_guess = Some(guess.clone());
        guess.text().to_string()
    }
}

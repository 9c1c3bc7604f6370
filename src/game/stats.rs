//! Session statistics
//!
//! Running counters over completed rounds. The mean number of guesses to
//! win is updated incrementally, so individual win counts are never stored
//! (only a per-attempt histogram).

use super::round::RoundOutcome;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Final numbers for a session
#[derive(Debug, Clone)]
pub struct Report {
    /// Secret words drawn
    pub games: usize,
    /// Rounds played (games × iterations)
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub disqualifications: usize,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub disqualification_rate: f64,
    /// Mean attempts over won rounds, or `max_attempts` with no wins
    pub mean_guesses: f64,
    pub max_attempts: usize,
    /// Wins by attempt count
    pub distribution: FxHashMap<usize, usize>,
    /// Time spent in the solver's one-time setup
    pub setup_latency: Duration,
    /// Wall-clock time for the whole session
    pub elapsed: Duration,
    pub average_round_duration: Duration,
}

/// Mutable accumulator fed by the session driver
#[derive(Debug, Clone)]
pub struct SessionStats {
    games: usize,
    wins: usize,
    losses: usize,
    disqualifications: usize,
    mean_guesses: f64,
    distribution: FxHashMap<usize, usize>,
    max_attempts: usize,
    setup_latency: Duration,
    started: Instant,
}

impl SessionStats {
    /// Start collecting; the session clock starts now
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            games: 0,
            wins: 0,
            losses: 0,
            disqualifications: 0,
            mean_guesses: 0.0,
            distribution: FxHashMap::default(),
            max_attempts,
            setup_latency: Duration::ZERO,
            started: Instant::now(),
        }
    }

    /// A new secret word was drawn
    pub fn record_game(&mut self) {
        self.games += 1;
    }

    pub fn record_win(&mut self, attempts: usize) {
        self.wins += 1;
        self.mean_guesses += (attempts as f64 - self.mean_guesses) / self.wins as f64;
        *self.distribution.entry(attempts).or_insert(0) += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn record_disqualification(&mut self) {
        self.disqualifications += 1;
    }

    /// Record any round outcome
    pub fn record(&mut self, outcome: &RoundOutcome) {
        match outcome {
            RoundOutcome::Won { attempts } => self.record_win(*attempts),
            RoundOutcome::Lost => self.record_loss(),
            RoundOutcome::Disqualified(_) => self.record_disqualification(),
        }
    }

    pub fn set_setup_latency(&mut self, latency: Duration) {
        self.setup_latency = latency;
    }

    /// Restart the session clock so it excludes solver setup
    pub fn start_clock(&mut self) {
        self.started = Instant::now();
    }

    /// Rounds recorded so far, whatever their outcome
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.wins + self.losses + self.disqualifications
    }

    /// Running mean of attempts over won rounds
    #[must_use]
    pub fn mean_guesses(&self) -> f64 {
        if self.wins == 0 {
            self.max_attempts as f64
        } else {
            self.mean_guesses
        }
    }

    /// Produce the report, stopping the session clock
    #[must_use]
    pub fn finalize(&self) -> Report {
        let rounds = self.rounds();
        let rate = |count: usize| {
            if rounds == 0 {
                0.0
            } else {
                count as f64 / rounds as f64
            }
        };

        let elapsed = self.started.elapsed();
        let average_round_duration = if rounds == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(elapsed.as_secs_f64() / rounds as f64)
        };

        Report {
            games: self.games,
            rounds,
            wins: self.wins,
            losses: self.losses,
            disqualifications: self.disqualifications,
            win_rate: rate(self.wins),
            loss_rate: rate(self.losses),
            disqualification_rate: rate(self.disqualifications),
            mean_guesses: self.mean_guesses(),
            max_attempts: self.max_attempts,
            distribution: self.distribution.clone(),
            setup_latency: self.setup_latency,
            elapsed,
            average_round_duration,
        }
    }
}

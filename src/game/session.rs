//! Session driver
//!
//! Plays `games` secret words. Each secret is played once per iteration
//! reported by the solver's setup (normally one), and every round is
//! recorded into the session statistics.

use super::round::{Rules, play_round};
use super::stats::{Report, SessionStats};
use crate::dictionary::Dictionary;
use crate::solver::{Solver, SolverContext};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::num::NonZeroUsize;
use std::time::Instant;

/// Parameters for a whole session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of secret words to draw
    pub games: usize,
    pub rules: Rules,
    /// Replaces the iteration count reported by the solver's setup
    pub iterations: Option<NonZeroUsize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 1,
            rules: Rules::default(),
            iterations: None,
            show_progress: false,
        }
    }
}

/// Run a full session and return its report
///
/// The solver context is created once here and never reset by the engine;
/// the solver's own `begin_round` hook is called before every round.
pub fn run_session<S: Solver, R: Rng + ?Sized>(
    dictionary: &Dictionary,
    solver: &mut S,
    config: &SessionConfig,
    rng: &mut R,
) -> Report {
    let mut context = SolverContext::new(dictionary, S::State::default());
    run_session_with_context(dictionary, solver, &mut context, config, rng)
}

/// Run a full session with a caller-owned solver context
pub fn run_session_with_context<S: Solver, R: Rng + ?Sized>(
    dictionary: &Dictionary,
    solver: &mut S,
    context: &mut SolverContext<'_, S::State>,
    config: &SessionConfig,
    rng: &mut R,
) -> Report {
    let mut stats = SessionStats::new(config.rules.max_attempts);

    let setup_start = Instant::now();
    let reported = solver.setup(context);
    stats.set_setup_latency(setup_start.elapsed());
    stats.start_clock();

    let iterations = config.iterations.map_or_else(
        || {
            if reported == 0 {
                log::warn!("Solver reported zero iterations, playing each word once");
            }
            reported.max(1)
        },
        NonZeroUsize::get,
    );
    log::debug!(
        "Playing {} games, {iterations} iteration(s) each",
        config.games
    );

    let progress = progress_bar(config);

    for game in 1..=config.games {
        let Some(secret) = dictionary.choose(rng) else {
            break;
        };

        log::info!("Wordle {game}");
        stats.record_game();

        for iteration in 0..iterations {
            solver.begin_round(context, iteration);
            let outcome = play_round(secret, dictionary, config.rules, solver, context);
            stats.record(&outcome);
        }

        if game % 10 == 0 {
            progress.set_message(format!("Avg: {:.2}", stats.mean_guesses()));
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    stats.finalize()
}

fn progress_bar(config: &SessionConfig) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(config.games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

//! Wordle Harness - CLI
//!
//! Plays a number of Wordle games with the selected solver and prints the
//! session statistics.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use wordle_harness::{
    core::FeedbackPolicy,
    dictionary::{Dictionary, load_from_file},
    game::{Report, Rules, SessionConfig, run_session},
    output::{ReportOptions, print_report},
    solver::{FixedSolver, NarrowingSolver, Solver},
};

#[derive(Parser)]
#[command(
    name = "wordle_harness",
    about = "Play a wordle game.",
    version,
    author
)]
struct Cli {
    /// Number of rounds to play
    #[arg(short = 'n', long = "num-rounds", value_name = "N", default_value_t = 1)]
    num_rounds: usize,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Newline-delimited list of valid words
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Guessing strategy
    #[arg(short, long, value_enum, default_value_t = SolverKind::Narrowing)]
    solver: SolverKind,

    /// Word played by the fixed solver
    #[arg(long, default_value = "hello")]
    fixed_word: String,

    /// Duplicate-letter feedback rule
    #[arg(long, value_enum, default_value_t = PolicyArg::Simplified)]
    policy: PolicyArg,

    /// Play each secret word this many times, overriding the solver
    #[arg(long, value_name = "K")]
    iterations: Option<NonZeroUsize>,

    /// Seed for reproducible secret words and random solver picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print timing metrics
    #[arg(short, long)]
    timing: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SolverKind {
    /// Always guess the same word
    Fixed,
    /// Guess the first word consistent with all hints
    Narrowing,
    /// Guess a random word consistent with all hints
    Random,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// A letter found anywhere in the secret is always marked present
    Simplified,
    /// Official Wordle duplicate-letter rules
    Canonical,
}

impl From<PolicyArg> for FeedbackPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Simplified => Self::Simplified,
            PolicyArg::Canonical => Self::Canonical,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let load_start = Instant::now();
    let dictionary = load_from_file(&cli.dictionary)
        .with_context(|| format!("Failed to load dictionary {}", cli.dictionary.display()))?;
    log::debug!(
        "Loaded {} words in {:?}",
        dictionary.len(),
        load_start.elapsed()
    );

    let policy = FeedbackPolicy::from(cli.policy);
    let config = SessionConfig {
        games: cli.num_rounds,
        rules: Rules {
            policy,
            ..Rules::default()
        },
        iterations: cli.iterations,
        show_progress: !cli.verbose && cli.num_rounds > 1,
    };

    let report = match cli.solver {
        SolverKind::Fixed => play(&dictionary, FixedSolver::new(cli.fixed_word), &config, cli.seed),
        SolverKind::Narrowing => play(&dictionary, NarrowingSolver::new(policy), &config, cli.seed),
        SolverKind::Random => play(
            &dictionary,
            NarrowingSolver::new(policy).randomized(solver_seed(cli.seed)),
            &config,
            cli.seed,
        ),
    };

    if cli.verbose {
        println!();
    }
    print_report(
        &report,
        ReportOptions {
            timing: cli.timing,
            distribution: cli.verbose,
        },
    );
    Ok(())
}

/// Seed for the random solver, kept apart from the secret-word stream
fn solver_seed(seed: Option<u64>) -> Option<u64> {
    seed.map(|s| s.wrapping_add(1))
}

fn play<S: Solver>(
    dictionary: &Dictionary,
    mut solver: S,
    config: &SessionConfig,
    seed: Option<u64>,
) -> Report {
    match seed {
        Some(seed) => run_session(
            dictionary,
            &mut solver,
            config,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => run_session(dictionary, &mut solver, config, &mut rand::rng()),
    }
}

//! Game engine
//!
//! Validation, the per-round state machine, the session loop and the
//! statistics it produces.

pub mod round;
pub mod session;
pub mod stats;
pub mod validator;

pub use round::{
    Disqualification, MAX_ATTEMPTS, Round, RoundOutcome, RoundState, Rules, play_round,
};
pub use session::{SessionConfig, run_session, run_session_with_context};
pub use stats::{Report, SessionStats};
pub use validator::{InvalidGuess, normalize, validate};

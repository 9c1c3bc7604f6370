//! Single-round state machine
//!
//! A round asks the solver for up to `max_attempts` guesses against one
//! secret word. It ends as soon as a guess is exact (won), the attempts run
//! out (lost), or a guess fails validation (disqualified).

use super::validator::{InvalidGuess, normalize, validate};
use crate::core::{FeedbackPolicy, Hint, Word};
use crate::dictionary::Dictionary;
use crate::solver::{Solver, SolverContext};
use std::fmt;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Fixed parameters of every round in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub max_attempts: usize,
    pub policy: FeedbackPolicy,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            policy: FeedbackPolicy::default(),
        }
    }
}

/// A rejected guess together with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disqualification {
    /// The guess exactly as the solver returned it
    pub guess: String,
    pub reason: InvalidGuess,
}

impl fmt::Display for Disqualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (your guess was {})", self.reason, normalize(&self.guess))
    }
}

/// Terminal result of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts: usize },
    Lost,
    Disqualified(Disqualification),
}

/// Where a round currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for guess number `attempt` (1-based)
    AwaitingGuess { attempt: usize },
    Won { attempts: usize },
    Lost,
    Disqualified(Disqualification),
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }

    /// The outcome, if the round has ended
    #[must_use]
    pub fn into_outcome(self) -> Option<RoundOutcome> {
        match self {
            Self::AwaitingGuess { .. } => None,
            Self::Won { attempts } => Some(RoundOutcome::Won { attempts }),
            Self::Lost => Some(RoundOutcome::Lost),
            Self::Disqualified(d) => Some(RoundOutcome::Disqualified(d)),
        }
    }
}

/// One round against a fixed secret word
#[derive(Debug)]
pub struct Round<'a> {
    secret: &'a Word,
    dictionary: &'a Dictionary,
    rules: Rules,
    state: RoundState,
    previous: Option<Hint>,
}

impl<'a> Round<'a> {
    #[must_use]
    pub const fn new(secret: &'a Word, dictionary: &'a Dictionary, rules: Rules) -> Self {
        Self {
            secret,
            dictionary,
            rules,
            state: RoundState::AwaitingGuess { attempt: 1 },
            previous: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    /// Hint produced by the most recent valid guess
    #[must_use]
    pub const fn previous_hint(&self) -> Option<&Hint> {
        self.previous.as_ref()
    }

    /// Request, validate and score one guess
    ///
    /// Does nothing once the round has ended.
    pub fn step<S: Solver>(
        &mut self,
        solver: &mut S,
        context: &mut SolverContext<'_, S::State>,
    ) -> &RoundState {
        let RoundState::AwaitingGuess { attempt } = self.state else {
            return &self.state;
        };
        let max_attempts = self.rules.max_attempts;

        log::info!("Guess ({attempt}/{max_attempts})? ");
        let raw = solver.request_guess(context, attempt - 1, self.previous.as_ref());

        let guess = match validate(&raw, self.dictionary) {
            Ok(word) => word,
            Err(reason) => {
                let disqualification = Disqualification { guess: raw, reason };
                log::warn!("{disqualification}");
                self.state = RoundState::Disqualified(disqualification);
                return &self.state;
            }
        };
        log::info!("{guess}");

        let hint = Hint::calculate(self.secret, guess, self.rules.policy);
        self.previous = Some(hint);

        self.state = if hint.is_solved() {
            log::info!(
                "You successfully guessed the word {} in {attempt} tries!",
                self.secret
            );
            RoundState::Won { attempts: attempt }
        } else {
            log::info!("{hint}");
            if attempt >= max_attempts {
                log::info!("You failed to guess the word {}.", self.secret);
                RoundState::Lost
            } else {
                RoundState::AwaitingGuess {
                    attempt: attempt + 1,
                }
            }
        };
        &self.state
    }

    /// Run the round to completion
    pub fn play<S: Solver>(
        mut self,
        solver: &mut S,
        context: &mut SolverContext<'_, S::State>,
    ) -> RoundOutcome {
        loop {
            if let Some(outcome) = self.step(solver, context).clone().into_outcome() {
                return outcome;
            }
        }
    }
}

/// Play one full round of `secret` with `solver`
pub fn play_round<S: Solver>(
    secret: &Word,
    dictionary: &Dictionary,
    rules: Rules,
    solver: &mut S,
    context: &mut SolverContext<'_, S::State>,
) -> RoundOutcome {
    Round::new(secret, dictionary, rules).play(solver, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::testing::{ScriptLog, ScriptedSolver};

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["crane", "slate", "irate", "crate", "grate", "hello"]).unwrap()
    }

    fn run(secret: &str, solver: &mut ScriptedSolver) -> (RoundOutcome, ScriptLog) {
        let dictionary = dictionary();
        let secret = Word::new(secret).unwrap();
        let mut context = SolverContext::new(&dictionary, ScriptLog::default());
        let outcome = play_round(&secret, &dictionary, Rules::default(), solver, &mut context);
        (outcome, context.into_state())
    }

    #[test]
    fn guessing_secret_wins_in_one() {
        let (outcome, log) = run("crane", &mut ScriptedSolver::always("crane"));
        assert_eq!(outcome, RoundOutcome::Won { attempts: 1 });
        assert_eq!(log.requests, vec![(0, None)]);
    }

    #[test]
    fn fixed_wrong_word_loses_after_six() {
        let (outcome, log) = run("crane", &mut ScriptedSolver::always("hello"));
        assert_eq!(outcome, RoundOutcome::Lost);
        assert_eq!(log.requests.len(), MAX_ATTEMPTS);
    }

    #[test]
    fn malformed_first_guess_disqualifies() {
        let (outcome, log) = run("crane", &mut ScriptedSolver::always("h3llo"));
        assert_eq!(
            outcome,
            RoundOutcome::Disqualified(Disqualification {
                guess: "h3llo".to_string(),
                reason: InvalidGuess::NonAlphabetic,
            })
        );
        assert_eq!(log.requests.len(), 1);
    }

    #[test]
    fn invalid_later_guess_ends_round_immediately() {
        let (outcome, log) = run("crane", &mut ScriptedSolver::new(&["slate", "zzzzz", "crane"]));
        assert!(matches!(
            outcome,
            RoundOutcome::Disqualified(Disqualification {
                reason: InvalidGuess::NotInDictionary,
                ..
            })
        ));
        assert_eq!(log.requests.len(), 2);
    }

    #[test]
    fn previous_hint_is_passed_to_next_request() {
        let (outcome, log) = run("grate", &mut ScriptedSolver::new(&["crane", "irate", "grate"]));
        assert_eq!(outcome, RoundOutcome::Won { attempts: 3 });

        let hints: Vec<Option<String>> = log
            .requests
            .iter()
            .map(|(_, hint)| hint.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(
            hints,
            vec![None, Some("xooxo".to_string()), Some("xoooo".to_string())]
        );
        let indices: Vec<usize> = log.requests.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn win_on_last_attempt_counts_as_win() {
        let mut solver = ScriptedSolver::new(&["hello", "hello", "hello", "hello", "hello", "crane"]);
        let (outcome, _) = run("crane", &mut solver);
        assert_eq!(outcome, RoundOutcome::Won { attempts: 6 });
    }

    #[test]
    fn guess_is_normalized_before_scoring() {
        let (outcome, _) = run("crane", &mut ScriptedSolver::always("  CRANE\n"));
        assert_eq!(outcome, RoundOutcome::Won { attempts: 1 });
    }

    #[test]
    fn step_walks_the_state_machine() {
        let dictionary = dictionary();
        let secret = Word::new("crane").unwrap();
        let mut context = SolverContext::new(&dictionary, ScriptLog::default());
        let mut solver = ScriptedSolver::new(&["slate", "crane"]);
        let mut round = Round::new(&secret, &dictionary, Rules::default());

        assert_eq!(round.state(), &RoundState::AwaitingGuess { attempt: 1 });
        assert!(round.previous_hint().is_none());

        round.step(&mut solver, &mut context);
        assert_eq!(round.state(), &RoundState::AwaitingGuess { attempt: 2 });
        assert_eq!(round.previous_hint().map(ToString::to_string).as_deref(), Some("xxoxo"));

        round.step(&mut solver, &mut context);
        assert_eq!(round.state(), &RoundState::Won { attempts: 2 });
        assert!(round.state().is_terminal());

        // Terminal rounds ignore further steps
        round.step(&mut solver, &mut context);
        assert_eq!(context.state().requests.len(), 2);
    }

    #[test]
    fn custom_max_attempts() {
        let dictionary = dictionary();
        let secret = Word::new("crane").unwrap();
        let mut context = SolverContext::new(&dictionary, ScriptLog::default());
        let rules = Rules {
            max_attempts: 2,
            ..Rules::default()
        };
        let outcome = play_round(
            &secret,
            &dictionary,
            rules,
            &mut ScriptedSolver::always("slate"),
            &mut context,
        );
        assert_eq!(outcome, RoundOutcome::Lost);
        assert_eq!(context.state().requests.len(), 2);
    }

    #[test]
    fn disqualification_message_shows_normalized_guess() {
        let disqualification = Disqualification {
            guess: " H3LLO ".to_string(),
            reason: InvalidGuess::NonAlphabetic,
        };
        let message = disqualification.to_string();
        assert!(message.ends_with("(your guess was h3llo)"), "{message}");
        assert!(message.starts_with(&InvalidGuess::NonAlphabetic.to_string()));
    }
}

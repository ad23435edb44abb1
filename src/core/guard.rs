//! Guards that compute a transition's destination from entity data.
//!
//! A guard is a pure decision function over the whole entity, not just its
//! state token. It either names the next state or explains why the
//! transition is refused.

use super::state::State;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Why a guard did not produce a destination state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GuardError {
    /// The transition is invalid for this entity (a business-rule failure).
    #[error("{0}")]
    Rejected(String),

    /// The guard itself failed unexpectedly.
    #[error("guard fault: {0}")]
    Fault(String),
}

impl GuardError {
    /// Build a domain rejection.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Build a fault from any displayable error.
    ///
    /// Handy with `map_err` inside a guard body:
    ///
    /// ```rust
    /// use turnstile::core::GuardError;
    ///
    /// fn parse_score(raw: &str) -> Result<u32, GuardError> {
    ///     raw.parse::<u32>().map_err(GuardError::fault)
    /// }
    ///
    /// assert!(matches!(parse_score("x"), Err(GuardError::Fault(_))));
    /// ```
    pub fn fault(err: impl fmt::Display) -> Self {
        Self::Fault(err.to_string())
    }
}

type GuardFn<E, S> = dyn Fn(&E) -> Result<S, GuardError> + Send + Sync;

/// Decision function that resolves a rule to a concrete state.
///
/// Guards are invoked at most once per resolution, synchronously, with the
/// entity borrowed immutably.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Guard, GuardError};
///
/// struct Exam {
///     score: u32,
/// }
///
/// let grade = Guard::named("grade", |exam: &Exam| {
///     if exam.score >= 50 {
///         Ok(String::from("passed"))
///     } else {
///         Err(GuardError::rejected("score too low"))
///     }
/// });
///
/// assert_eq!(grade.decide(&Exam { score: 71 }), Ok(String::from("passed")));
/// assert_eq!(
///     grade.decide(&Exam { score: 12 }),
///     Err(GuardError::Rejected(String::from("score too low")))
/// );
/// ```
pub struct Guard<E, S: State> {
    name: Option<String>,
    decide: Arc<GuardFn<E, S>>,
}

impl<E, S: State> Guard<E, S> {
    /// Create an anonymous guard from a decision function.
    ///
    /// The function must be deterministic for a given entity and
    /// thread-safe (Send + Sync).
    pub fn new<F>(decide: F) -> Self
    where
        F: Fn(&E) -> Result<S, GuardError> + Send + Sync + 'static,
    {
        Guard {
            name: None,
            decide: Arc::new(decide),
        }
    }

    /// Create a guard with a name used in diagnostics.
    pub fn named<F>(name: impl Into<String>, decide: F) -> Self
    where
        F: Fn(&E) -> Result<S, GuardError> + Send + Sync + 'static,
    {
        Guard {
            name: Some(name.into()),
            decide: Arc::new(decide),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Evaluate the guard against an entity.
    pub fn decide(&self, entity: &E) -> Result<S, GuardError> {
        (self.decide)(entity)
    }
}

impl<E, S: State> Clone for Guard<E, S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            decide: Arc::clone(&self.decide),
        }
    }
}

impl<E, S: State> fmt::Debug for Guard<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("name", &self.name.as_deref().unwrap_or("<anonymous>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
            }
        }
    }

    struct Keypad {
        entered: String,
        secret: String,
    }

    fn passcode_guard() -> Guard<Keypad, TestState> {
        Guard::named("passcode", |pad: &Keypad| {
            if pad.entered == pad.secret {
                Ok(TestState::Unlocked)
            } else {
                Err(GuardError::rejected("invalid passcode"))
            }
        })
    }

    #[test]
    fn guard_returns_destination_on_success() {
        let pad = Keypad {
            entered: "1234".to_string(),
            secret: "1234".to_string(),
        };

        assert_eq!(passcode_guard().decide(&pad), Ok(TestState::Unlocked));
    }

    #[test]
    fn guard_rejects_with_reason() {
        let pad = Keypad {
            entered: "0000".to_string(),
            secret: "1234".to_string(),
        };

        assert_eq!(
            passcode_guard().decide(&pad),
            Err(GuardError::Rejected("invalid passcode".to_string()))
        );
    }

    #[test]
    fn guard_is_deterministic() {
        let pad = Keypad {
            entered: "1234".to_string(),
            secret: "1234".to_string(),
        };
        let guard = passcode_guard();

        assert_eq!(guard.decide(&pad), guard.decide(&pad));
    }

    #[test]
    fn fault_captures_error_message() {
        let guard: Guard<&str, TestState> = Guard::new(|raw: &&str| {
            let code: u32 = raw.parse().map_err(GuardError::fault)?;
            if code == 0 {
                Ok(TestState::Locked)
            } else {
                Ok(TestState::Unlocked)
            }
        });

        assert_eq!(guard.decide(&"0"), Ok(TestState::Locked));
        assert!(matches!(guard.decide(&"zero"), Err(GuardError::Fault(_))));
    }

    #[test]
    fn clone_shares_decision_function() {
        let guard = passcode_guard();
        let cloned = guard.clone();
        let pad = Keypad {
            entered: "1".to_string(),
            secret: "2".to_string(),
        };

        assert_eq!(cloned.name(), Some("passcode"));
        assert_eq!(guard.decide(&pad), cloned.decide(&pad));
    }

    #[test]
    fn debug_shows_name_only() {
        let anonymous: Guard<Keypad, TestState> = Guard::new(|_| Ok(TestState::Locked));
        assert!(format!("{:?}", anonymous).contains("<anonymous>"));
        assert!(format!("{:?}", passcode_guard()).contains("passcode"));
    }

    #[test]
    fn error_display_keeps_reason_verbatim() {
        assert_eq!(
            GuardError::rejected("invalid passcode").to_string(),
            "invalid passcode"
        );
        assert_eq!(
            GuardError::Fault("boom".to_string()).to_string(),
            "guard fault: boom"
        );
    }
}

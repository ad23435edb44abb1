//! Results of resolving a transition.

use thiserror::Error;

/// Why a transition did not happen.
///
/// Both variants are ordinary results, not exceptional conditions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Failure {
    /// No rule matched the current state and event.
    #[error("transition '{event}' not allowed from state '{state}'")]
    NotAllowed { state: String, event: String },

    /// A guard refused the transition for this entity.
    #[error("transition rejected: {reason}")]
    GuardRejected { reason: String },
}

/// A guard failed unexpectedly while deciding a transition.
///
/// Unlike [`Failure`], this signals a bug in guard logic and is returned
/// through the `Err` side of [`Resolver::transit`](super::Resolver::transit).
#[derive(Debug, Clone, Error, PartialEq)]
#[error("guard '{guard}' faulted on '{event}' from '{state}': {message}")]
pub struct GuardFault {
    pub guard: String,
    pub state: String,
    pub event: String,
    pub message: String,
}

/// Result of a transition attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionOutcome<T> {
    /// Transition allowed; carries the new state (or new entity).
    Success(T),

    /// Transition refused.
    Failure(Failure),
}

impl<T> TransitionOutcome<T> {
    pub fn not_allowed(state: &str, event: &str) -> Self {
        Self::Failure(Failure::NotAllowed {
            state: state.to_string(),
            event: event.to_string(),
        })
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Failure(Failure::GuardRejected {
            reason: reason.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_not_allowed(&self) -> bool {
        matches!(self, Self::Failure(Failure::NotAllowed { .. }))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Failure(Failure::GuardRejected { .. }))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn map<U, F>(self, f: F) -> TransitionOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => TransitionOutcome::Success(f(value)),
            Self::Failure(failure) => TransitionOutcome::Failure(failure),
        }
    }

    /// Convert into a `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<TransitionOutcome<T>> for Result<T, Failure> {
    fn from(outcome: TransitionOutcome<T>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_allowed_and_rejected_are_distinct() {
        let not_allowed: TransitionOutcome<u8> = TransitionOutcome::not_allowed("opened", "lock");
        let rejected: TransitionOutcome<u8> = TransitionOutcome::rejected("invalid passcode");

        assert!(not_allowed.is_not_allowed());
        assert!(!not_allowed.is_rejected());
        assert!(rejected.is_rejected());
        assert!(!rejected.is_not_allowed());
        assert_ne!(not_allowed, rejected);
    }

    #[test]
    fn map_transforms_success_only() {
        let success = TransitionOutcome::Success(2).map(|n| n * 10);
        assert_eq!(success.success(), Some(&20));

        let failure: TransitionOutcome<i32> = TransitionOutcome::not_allowed("a", "b");
        let mapped = failure.map(|n| n * 10);
        assert!(mapped.is_not_allowed());
    }

    #[test]
    fn into_result_exposes_failure() {
        let rejected: TransitionOutcome<u8> = TransitionOutcome::rejected("too low");
        assert_eq!(
            rejected.into_result(),
            Err(Failure::GuardRejected {
                reason: "too low".to_string()
            })
        );

        let result: Result<u8, Failure> = TransitionOutcome::Success(7).into();
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn failure_messages_name_state_and_event() {
        let failure = Failure::NotAllowed {
            state: "opened".to_string(),
            event: "lock".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "transition 'lock' not allowed from state 'opened'"
        );
    }

    #[test]
    fn fault_message_includes_guard() {
        let fault = GuardFault {
            guard: "passcode".to_string(),
            state: "locked".to_string(),
            event: "unlock".to_string(),
            message: "keypad offline".to_string(),
        };
        assert_eq!(
            fault.to_string(),
            "guard 'passcode' faulted on 'unlock' from 'locked': keypad offline"
        );
    }
}

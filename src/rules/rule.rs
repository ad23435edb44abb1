//! The atomic unit of a rule table.

use crate::core::{Event, Guard, GuardError, State};
use std::fmt;

/// Which current states a rule applies to.
///
/// `Any` always matches; otherwise matching is exact equality.
#[derive(Clone, Debug, PartialEq)]
pub enum Source<S: State> {
    /// Matches every current state.
    Any,
    /// Matches exactly this state.
    State(S),
}

impl<S: State> Source<S> {
    pub fn matches(&self, state: &S) -> bool {
        match self {
            Self::Any => true,
            Self::State(source) => source == state,
        }
    }

    /// True when every state matched by `other` is also matched by `self`.
    pub fn covers(&self, other: &Source<S>) -> bool {
        match (self, other) {
            (Self::Any, _) => true,
            (Self::State(_), Self::Any) => false,
            (Self::State(a), Self::State(b)) => a == b,
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::State(state) => state.name(),
        }
    }
}

/// What a matching rule resolves to.
pub enum Outcome<E, S: State> {
    /// A fixed destination state.
    Target(S),
    /// A destination computed from the entity.
    Guard(Guard<E, S>),
}

/// A single `(source, event) -> outcome` rule.
///
/// Rules are immutable once placed in a [`RuleTable`](super::RuleTable).
pub struct TransitionRule<S: State, Ev: Event, E> {
    pub source: Source<S>,
    pub event: Ev,
    pub outcome: Outcome<E, S>,
}

impl<S: State, Ev: Event, E> TransitionRule<S, Ev, E> {
    pub fn new(source: Source<S>, event: Ev, outcome: Outcome<E, S>) -> Self {
        Self {
            source,
            event,
            outcome,
        }
    }

    /// `from --event--> to`
    pub fn fixed(from: S, event: Ev, to: S) -> Self {
        Self::new(Source::State(from), event, Outcome::Target(to))
    }

    /// `* --event--> to`
    pub fn any(event: Ev, to: S) -> Self {
        Self::new(Source::Any, event, Outcome::Target(to))
    }

    /// `from --event--> guard(entity)`
    pub fn guarded<F>(from: S, event: Ev, decide: F) -> Self
    where
        F: Fn(&E) -> Result<S, GuardError> + Send + Sync + 'static,
    {
        Self::new(Source::State(from), event, Outcome::Guard(Guard::new(decide)))
    }

    /// Structural match only; guards are not evaluated here.
    pub fn matches(&self, state: &S, event: &Ev) -> bool {
        self.event == *event && self.source.matches(state)
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self.outcome, Outcome::Guard(_))
    }
}

// Manual impls: the entity type needs neither Clone nor Debug.
impl<E, S: State> Clone for Outcome<E, S> {
    fn clone(&self) -> Self {
        match self {
            Self::Target(state) => Self::Target(state.clone()),
            Self::Guard(guard) => Self::Guard(guard.clone()),
        }
    }
}

impl<E, S: State> fmt::Debug for Outcome<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(state) => f.debug_tuple("Target").field(state).finish(),
            Self::Guard(guard) => f.debug_tuple("Guard").field(guard).finish(),
        }
    }
}

impl<S: State, Ev: Event, E> Clone for TransitionRule<S, Ev, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            event: self.event.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

impl<S: State, Ev: Event, E> fmt::Debug for TransitionRule<S, Ev, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRule")
            .field("source", &self.source)
            .field("event", &self.event)
            .field("outcome", &self.outcome)
            .finish()
    }
}

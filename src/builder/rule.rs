//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, GuardError, State};
use crate::rules::{Outcome, Source, TransitionRule};

/// Builder for constructing rules with a fluent API.
///
/// The last of `.to()`, `.guard()` and `.decide()` wins, as does the last of
/// `.from()` and `.from_any()`.
pub struct RuleBuilder<S: State, Ev: Event, E> {
    source: Option<Source<S>>,
    event: Option<Ev>,
    outcome: Option<Outcome<E, S>>,
}

impl<S: State, Ev: Event, E> RuleBuilder<S, Ev, E> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            source: None,
            event: None,
            outcome: None,
        }
    }

    /// Set the source state.
    pub fn from(mut self, state: S) -> Self {
        self.source = Some(Source::State(state));
        self
    }

    /// Match any current state.
    pub fn from_any(mut self) -> Self {
        self.source = Some(Source::Any);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: Ev) -> Self {
        self.event = Some(event);
        self
    }

    /// Set a fixed target state.
    pub fn to(mut self, state: S) -> Self {
        self.outcome = Some(Outcome::Target(state));
        self
    }

    /// Resolve the target through a guard.
    pub fn guard(mut self, guard: Guard<E, S>) -> Self {
        self.outcome = Some(Outcome::Guard(guard));
        self
    }

    /// Resolve the target through a closure over the entity.
    pub fn decide<F>(mut self, decide: F) -> Self
    where
        F: Fn(&E) -> Result<S, GuardError> + Send + Sync + 'static,
    {
        self.outcome = Some(Outcome::Guard(Guard::new(decide)));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<TransitionRule<S, Ev, E>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let outcome = self.outcome.ok_or(BuildError::MissingOutcome)?;

        Ok(TransitionRule::new(source, event, outcome))
    }
}

impl<S: State, Ev: Event, E> Default for RuleBuilder<S, Ev, E> {
    fn default() -> Self {
        Self::new()
    }
}

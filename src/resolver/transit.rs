//! First-match-wins resolution over a rule table.

use crate::core::{Event, GuardError, State};
use crate::resolver::outcome::{GuardFault, TransitionOutcome};
use crate::rules::{Outcome, RuleTable};

/// Resolves `(entity, state, event)` against a [`RuleTable`].
///
/// The resolver holds nothing but the table. It borrows the entity for the
/// duration of one call and never mutates it.
pub struct Resolver<S: State, Ev: Event, E> {
    table: RuleTable<S, Ev, E>,
}

impl<S: State, Ev: Event, E> Resolver<S, Ev, E> {
    pub fn new(table: RuleTable<S, Ev, E>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable<S, Ev, E> {
        &self.table
    }

    /// Resolve one transition attempt.
    ///
    /// Takes the first rule (in declaration order) whose source matches
    /// `state` and whose event equals `event`. A fixed target succeeds
    /// immediately; a guard is invoked once with `entity`. A guard rejection
    /// does not fall through to later rules.
    ///
    /// Returns `Ok(Failure(NotAllowed))` when nothing matches and
    /// `Err(GuardFault)` only when a guard reports a fault.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::resolver::{Resolver, TransitionOutcome};
    /// use turnstile::rules::{RuleTable, TransitionRule};
    ///
    /// let resolver: Resolver<String, String, ()> = Resolver::new(RuleTable::new(vec![
    ///     TransitionRule::fixed("locked".into(), "unlock".into(), "unlocked".into()),
    /// ]));
    ///
    /// let outcome = resolver
    ///     .transit(&(), &"locked".to_string(), &"unlock".to_string())
    ///     .unwrap();
    /// assert_eq!(outcome, TransitionOutcome::Success("unlocked".to_string()));
    ///
    /// let outcome = resolver
    ///     .transit(&(), &"unlocked".to_string(), &"unlock".to_string())
    ///     .unwrap();
    /// assert!(outcome.is_not_allowed());
    /// ```
    pub fn transit(
        &self,
        entity: &E,
        state: &S,
        event: &Ev,
    ) -> Result<TransitionOutcome<S>, GuardFault> {
        let Some((index, rule)) = self.table.first_match(state, event) else {
            tracing::debug!(
                state = state.name(),
                event = event.name(),
                "no transition rule matched"
            );
            return Ok(TransitionOutcome::not_allowed(state.name(), event.name()));
        };

        tracing::trace!(
            rule = index,
            source = rule.source.describe(),
            event = event.name(),
            "transition rule selected"
        );

        let guard = match &rule.outcome {
            Outcome::Target(target) => return Ok(TransitionOutcome::Success(target.clone())),
            Outcome::Guard(guard) => guard,
        };

        match guard.decide(entity) {
            Ok(target) => Ok(TransitionOutcome::Success(target)),
            Err(GuardError::Rejected(reason)) => {
                tracing::debug!(
                    state = state.name(),
                    event = event.name(),
                    reason = %reason,
                    "guard rejected transition"
                );
                Ok(TransitionOutcome::rejected(reason))
            }
            Err(GuardError::Fault(message)) => {
                let guard_name = guard
                    .name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("rule #{index}"));
                tracing::warn!(
                    guard = %guard_name,
                    state = state.name(),
                    event = event.name(),
                    error = %message,
                    "guard faulted"
                );
                Err(GuardFault {
                    guard: guard_name,
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                    message,
                })
            }
        }
    }
}

impl<S: State, Ev: Event, E> Clone for Resolver<S, Ev, E> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<S: State, Ev: Event, E> From<RuleTable<S, Ev, E>> for Resolver<S, Ev, E> {
    fn from(table: RuleTable<S, Ev, E>) -> Self {
        Self::new(table)
    }
}

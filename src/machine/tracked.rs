//! An entity paired with the history of transitions applied to it.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::StateMachine;
use crate::resolver::{GuardFault, TransitionOutcome};
use chrono::Utc;

/// Caller-side holder for an entity and its transition history.
///
/// `fire` resolves an event through a [`StateMachine`] and, when it succeeds,
/// replaces the held entity with the updated copy and records the move. On a
/// failure or a guard fault the entity and history stay as they were.
#[derive(Clone, Debug)]
pub struct Tracked<E, S: State> {
    entity: E,
    history: StateHistory<S>,
}

impl<E, S: State> Tracked<E, S> {
    pub fn new(entity: E) -> Self {
        Self {
            entity,
            history: StateHistory::new(),
        }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn into_inner(self) -> E {
        self.entity
    }

    /// Attempt `event`; returns the new state on success.
    pub fn fire<Ev: Event>(
        &mut self,
        machine: &StateMachine<S, Ev, E>,
        event: &Ev,
    ) -> Result<TransitionOutcome<S>, GuardFault> {
        let from = machine.state_of(&self.entity).clone();
        let next = match machine.transit(&self.entity, event)? {
            TransitionOutcome::Success(next) => next,
            TransitionOutcome::Failure(failure) => return Ok(TransitionOutcome::Failure(failure)),
        };

        self.entity = machine.accessor().set(&self.entity, next.clone());
        self.history = self.history.record(StateTransition {
            from,
            to: next.clone(),
            event: event.name().to_string(),
            timestamp: Utc::now(),
        });
        Ok(TransitionOutcome::Success(next))
    }
}

//! Entity-facing entry point: a resolver plus a state accessor.

use crate::core::{Event, State};
use crate::machine::accessor::{StateAccessor, Stateful};
use crate::resolver::{GuardFault, Resolver, TransitionOutcome};
use crate::rules::RuleTable;

/// Drives entities of type `E` through a rule table.
///
/// The machine reads the current state out of the entity through its
/// [`StateAccessor`] and hands it to the [`Resolver`]. It owns no entity
/// state; every call is independent.
pub struct StateMachine<S: State, Ev: Event, E> {
    resolver: Resolver<S, Ev, E>,
    accessor: StateAccessor<E, S>,
}

impl<S: State, Ev: Event, E> StateMachine<S, Ev, E> {
    pub fn new(table: RuleTable<S, Ev, E>, accessor: StateAccessor<E, S>) -> Self {
        Self {
            resolver: Resolver::new(table),
            accessor,
        }
    }

    pub fn table(&self) -> &RuleTable<S, Ev, E> {
        self.resolver.table()
    }

    pub fn resolver(&self) -> &Resolver<S, Ev, E> {
        &self.resolver
    }

    pub fn accessor(&self) -> &StateAccessor<E, S> {
        &self.accessor
    }

    /// Current state of `entity`, as seen through the accessor.
    pub fn state_of<'a>(&self, entity: &'a E) -> &'a S {
        self.accessor.get(entity)
    }

    /// Resolve `event` for `entity` and return the next state.
    pub fn transit(&self, entity: &E, event: &Ev) -> Result<TransitionOutcome<S>, GuardFault> {
        let state = self.accessor.get(entity);
        tracing::trace!(
            field = self.accessor.field(),
            state = state.name(),
            event = event.name(),
            "resolving transition"
        );
        self.resolver.transit(entity, state, event)
    }

    /// Resolve `event` and, on success, return a copy of `entity` with its
    /// state field replaced. The input entity is left untouched.
    pub fn apply(&self, entity: &E, event: &Ev) -> Result<TransitionOutcome<E>, GuardFault> {
        let outcome = self.transit(entity, event)?;
        Ok(outcome.map(|next| self.accessor.set(entity, next)))
    }

    /// Whether some rule matches `event` in the entity's current state.
    /// Guards are not evaluated.
    pub fn can_transit(&self, entity: &E, event: &Ev) -> bool {
        self.table().can_transit(self.accessor.get(entity), event)
    }

    /// Events with at least one matching rule in the entity's current state.
    pub fn available_events(&self, entity: &E) -> Vec<&Ev> {
        self.table().events_for(self.accessor.get(entity))
    }
}

impl<S: State + 'static, Ev: Event, E: Stateful<S> + 'static> StateMachine<S, Ev, E> {
    /// Machine over an entity whose state lives in its `state` field.
    pub fn stateful(table: RuleTable<S, Ev, E>) -> Self {
        Self::new(table, StateAccessor::stateful())
    }
}

impl<S: State, Ev: Event, E> Clone for StateMachine<S, Ev, E> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuardError;
    use crate::resolver::Failure;
    use crate::rules::TransitionRule;
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Review {
        Draft,
        Submitted,
        Approved,
        Returned,
    }

    impl State for Review {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Submitted => "Submitted",
                Self::Approved => "Approved",
                Self::Returned => "Returned",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Action {
        Submit,
        Decide,
        Withdraw,
    }

    impl Event for Action {
        fn name(&self) -> &str {
            match self {
                Self::Submit => "submit",
                Self::Decide => "decide",
                Self::Withdraw => "withdraw",
            }
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Paper {
        review: Review,
        score: u32,
    }

    fn table() -> RuleTable<Review, Action, Paper> {
        RuleTable::new(vec![
            TransitionRule::fixed(Review::Draft, Action::Submit, Review::Submitted),
            TransitionRule::guarded(Review::Submitted, Action::Decide, |p: &Paper| {
                match p.score {
                    0 => Err(GuardError::rejected("not yet scored")),
                    1..=5 => Ok(Review::Returned),
                    _ => Ok(Review::Approved),
                }
            }),
            TransitionRule::any(Action::Withdraw, Review::Draft),
        ])
    }

    fn machine() -> StateMachine<Review, Action, Paper> {
        StateMachine::new(
            table(),
            StateAccessor::new(
                "review",
                |p: &Paper| &p.review,
                |p: &Paper, review| Paper { review, ..p.clone() },
            ),
        )
    }

    #[test]
    fn transit_reads_configured_field() {
        let paper = Paper {
            review: Review::Draft,
            score: 0,
        };

        let outcome = machine().transit(&paper, &Action::Submit).unwrap();
        assert_eq!(outcome, TransitionOutcome::Success(Review::Submitted));
    }

    #[test]
    fn apply_returns_updated_copy() {
        let paper = Paper {
            review: Review::Submitted,
            score: 9,
        };

        let outcome = machine().apply(&paper, &Action::Decide).unwrap();

        assert_eq!(
            outcome,
            TransitionOutcome::Success(Paper {
                review: Review::Approved,
                score: 9,
            })
        );
        assert_eq!(paper.review, Review::Submitted);
    }

    #[test]
    fn apply_passes_failures_through() {
        let machine = machine();
        let unscored = Paper {
            review: Review::Submitted,
            score: 0,
        };
        let draft = Paper {
            review: Review::Draft,
            score: 3,
        };

        assert!(machine
            .apply(&unscored, &Action::Decide)
            .unwrap()
            .is_rejected());
        assert_eq!(
            machine.apply(&draft, &Action::Decide).unwrap(),
            TransitionOutcome::Failure(Failure::NotAllowed {
                state: "Draft".to_string(),
                event: "decide".to_string(),
            })
        );
    }

    #[test]
    fn available_events_follow_current_state() {
        let machine = machine();
        let paper = Paper {
            review: Review::Submitted,
            score: 0,
        };

        assert_eq!(
            machine.available_events(&paper),
            vec![&Action::Decide, &Action::Withdraw]
        );
        assert!(machine.can_transit(&paper, &Action::Decide));
        assert!(!machine.can_transit(&paper, &Action::Submit));
    }

    #[test]
    fn machine_is_shareable_across_threads() {
        let machine = Arc::new(machine());

        let handles: Vec<_> = (0..4u32)
            .map(|score| {
                let machine = Arc::clone(&machine);
                std::thread::spawn(move || {
                    let paper = Paper {
                        review: Review::Submitted,
                        score: score * 3,
                    };
                    machine.transit(&paper, &Action::Decide).unwrap()
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outcomes[0].is_rejected());
        assert_eq!(outcomes[1], TransitionOutcome::Success(Review::Returned));
        assert_eq!(outcomes[3], TransitionOutcome::Success(Review::Approved));
    }
}

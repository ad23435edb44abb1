//! Ordered, immutable rule storage.

use super::rule::TransitionRule;
use crate::core::{Event, State};
use std::fmt;
use std::sync::Arc;

/// An ordered collection of transition rules.
///
/// Declaration order is significant: the resolver always takes the first
/// rule that matches. The table is read-only once built and cheap to clone,
/// so it can be shared between threads without locking.
///
/// An empty table is valid and behaves as a machine on which every
/// transition is not allowed.
///
/// # Example
///
/// ```rust
/// use turnstile::rules::{RuleTable, TransitionRule};
///
/// let table: RuleTable<String, String, ()> = RuleTable::new(vec![
///     TransitionRule::fixed("locked".into(), "unlock".into(), "unlocked".into()),
///     TransitionRule::fixed("unlocked".into(), "lock".into(), "locked".into()),
/// ]);
///
/// let state = String::from("locked");
/// let event = String::from("unlock");
/// assert_eq!(table.candidates(&state, &event).count(), 1);
/// ```
pub struct RuleTable<S: State, Ev: Event, E> {
    rules: Arc<[TransitionRule<S, Ev, E>]>,
}

impl<S: State, Ev: Event, E> RuleTable<S, Ev, E> {
    /// Store the rules verbatim, preserving their order.
    pub fn new(rules: Vec<TransitionRule<S, Ev, E>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Every rule matching `(state, event)`, in declaration order.
    ///
    /// Lazy and side-effect free; guards are not evaluated.
    pub fn candidates<'a>(
        &'a self,
        state: &'a S,
        event: &'a Ev,
    ) -> impl Iterator<Item = &'a TransitionRule<S, Ev, E>> + 'a {
        self.indexed_candidates(state, event).map(|(_, rule)| rule)
    }

    /// Position and rule of the first candidate, if any.
    pub fn first_match(
        &self,
        state: &S,
        event: &Ev,
    ) -> Option<(usize, &TransitionRule<S, Ev, E>)> {
        self.indexed_candidates(state, event).next()
    }

    fn indexed_candidates<'a, 'b>(
        &'a self,
        state: &'b S,
        event: &'b Ev,
    ) -> impl Iterator<Item = (usize, &'a TransitionRule<S, Ev, E>)> + 'b
    where
        'a: 'b,
    {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| rule.matches(state, event))
    }

    /// Whether any rule structurally matches. Guards are not consulted, so a
    /// `true` here can still resolve to a rejection.
    pub fn can_transit(&self, state: &S, event: &Ev) -> bool {
        self.candidates(state, event).next().is_some()
    }

    /// Events with at least one rule applicable from `state`, in
    /// declaration order, without duplicates.
    pub fn events_for(&self, state: &S) -> Vec<&Ev> {
        let mut events: Vec<&Ev> = Vec::new();
        for rule in self.rules.iter().filter(|rule| rule.source.matches(state)) {
            if !events.contains(&&rule.event) {
                events.push(&rule.event);
            }
        }
        events
    }

    pub fn rules(&self) -> &[TransitionRule<S, Ev, E>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: State, Ev: Event, E> Clone for RuleTable<S, Ev, E> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<S: State, Ev: Event, E> Default for RuleTable<S, Ev, E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: State, Ev: Event, E> fmt::Debug for RuleTable<S, Ev, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

impl<S: State, Ev: Event, E> From<Vec<TransitionRule<S, Ev, E>>> for RuleTable<S, Ev, E> {
    fn from(rules: Vec<TransitionRule<S, Ev, E>>) -> Self {
        Self::new(rules)
    }
}

//! Builder for constructing rule tables.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{Event, State};
use crate::rules::{RuleTable, TransitionRule};

/// Builder for assembling a [`RuleTable`] in declaration order.
pub struct RuleTableBuilder<S: State, Ev: Event, E> {
    rules: Vec<TransitionRule<S, Ev, E>>,
}

impl<S: State, Ev: Event, E> RuleTableBuilder<S, Ev, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule(mut self, builder: RuleBuilder<S, Ev, E>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: TransitionRule<S, Ev, E>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once, keeping their order.
    pub fn rules(mut self, rules: Vec<TransitionRule<S, Ev, E>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the table. Duplicate or shadowed rules are accepted as-is;
    /// see [`RuleTable::audit`] to find them.
    pub fn build(self) -> RuleTable<S, Ev, E> {
        RuleTable::new(self.rules)
    }
}

impl<S: State, Ev: Event, E> Default for RuleTableBuilder<S, Ev, E> {
    fn default() -> Self {
        Self::new()
    }
}

//! The rule table: ordered `(source, event) -> outcome` rules.
//!
//! This is plain immutable data with a lookup primitive. Resolution
//! (picking a rule and evaluating its guard) lives in [`crate::resolver`].

mod rule;
mod table;

pub use rule::{Outcome, Source, TransitionRule};
pub use table::RuleTable;

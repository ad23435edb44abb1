//! Transition resolution.
//!
//! Given an entity, its current state and an event, the resolver scans the
//! rule table in declaration order, takes the first structural match and
//! evaluates its outcome.
//!
//! # Failure taxonomy
//!
//! - [`Failure::NotAllowed`]: no rule matched. An expected result.
//! - [`Failure::GuardRejected`]: a guard refused. An expected result.
//! - [`GuardFault`]: a guard broke. Returned as `Err`, never downgraded.

mod outcome;
mod transit;

pub use outcome::{Failure, GuardFault, TransitionOutcome};
pub use transit::Resolver;

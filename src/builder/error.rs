//! Build errors for rule builders.

use thiserror::Error;

/// Errors that can occur when building a transition rule.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Rule source not specified. Call .from(state) or .from_any()")]
    MissingSource,

    #[error("Rule event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Rule outcome not specified. Call .to(state), .guard(guard) or .decide(f)")]
    MissingOutcome,
}

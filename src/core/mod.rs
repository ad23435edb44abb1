//! Core value types of the rule engine.
//!
//! This module contains the pure building blocks shared by the rule table
//! and the resolver:
//! - States and events via the `State` and `Event` traits
//! - Guards that compute a destination from entity data
//! - Immutable history of applied transitions

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::{Guard, GuardError};
pub use history::{StateHistory, StateTransition};
pub use state::State;

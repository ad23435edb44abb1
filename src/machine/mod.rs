//! The boundary between the rule engine and caller-owned entities.
//!
//! - [`StateAccessor`] / [`Stateful`]: where an entity keeps its state
//! - [`StateMachine`]: resolve events against an entity, optionally
//!   producing the updated entity
//! - [`Tracked`]: an entity plus the history of transitions applied to it

mod accessor;
mod state_machine;
mod tracked;

pub use accessor::{StateAccessor, Stateful};
pub use state_machine::StateMachine;
pub use tracked::Tracked;

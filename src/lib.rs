//! Turnstile: a declarative transition-rule engine
//!
//! A finite-state machine is described as an ordered list of
//! `(current state, event) -> next state` rules. Resolving an event scans
//! the rules in declaration order and takes the first one that matches;
//! a rule may name its destination directly or compute it with a guard over
//! the entity that holds the state.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: opaque comparable tokens (`State`, `Event` traits)
//! - **Rule table**: immutable, ordered, shareable (`rules::RuleTable`)
//! - **Resolver**: first-match-wins resolution (`resolver::Resolver`)
//! - **Guards**: pure decision functions over the entity (`core::Guard`)
//! - **State machine**: reads the state field of caller-owned entities
//!   (`machine::StateMachine`)
//!
//! Unmatched transitions and guard rejections are ordinary results
//! (`TransitionOutcome::Failure`); only a faulting guard produces an `Err`.
//!
//! # Example
//!
//! ```rust
//! use turnstile::builder::simple_rule;
//! use turnstile::machine::{StateMachine, Stateful};
//! use turnstile::rules::RuleTable;
//! use turnstile::{event_enum, state_enum, TransitionOutcome};
//!
//! state_enum! {
//!     enum DoorState {
//!         Locked,
//!         Unlocked,
//!         Opened,
//!     }
//! }
//!
//! event_enum! {
//!     enum DoorEvent {
//!         Lock = "lock",
//!         Unlock = "unlock",
//!         Open = "open",
//!     }
//! }
//!
//! #[derive(Clone)]
//! struct Door {
//!     state: DoorState,
//! }
//!
//! impl Stateful<DoorState> for Door {
//!     fn state(&self) -> &DoorState {
//!         &self.state
//!     }
//!
//!     fn with_state(&self, state: DoorState) -> Self {
//!         Door { state }
//!     }
//! }
//!
//! let machine = StateMachine::stateful(RuleTable::new(vec![
//!     simple_rule(DoorState::Locked, DoorEvent::Unlock, DoorState::Unlocked),
//!     simple_rule(DoorState::Unlocked, DoorEvent::Lock, DoorState::Locked),
//!     simple_rule(DoorState::Unlocked, DoorEvent::Open, DoorState::Opened),
//! ]));
//!
//! let door = Door { state: DoorState::Locked };
//! let door = match machine.apply(&door, &DoorEvent::Unlock).unwrap() {
//!     TransitionOutcome::Success(door) => door,
//!     TransitionOutcome::Failure(failure) => panic!("{failure}"),
//! };
//! assert_eq!(door.state, DoorState::Unlocked);
//!
//! let outcome = machine.transit(&Door { state: DoorState::Opened }, &DoorEvent::Lock);
//! assert!(outcome.unwrap().is_not_allowed());
//! ```

pub mod audit;
pub mod builder;
pub mod core;
pub mod machine;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Event, Guard, GuardError, State, StateHistory, StateTransition};
pub use crate::machine::{StateAccessor, StateMachine, Stateful, Tracked};
pub use crate::resolver::{Failure, GuardFault, Resolver, TransitionOutcome};
pub use crate::rules::{Outcome, RuleTable, Source, TransitionRule};

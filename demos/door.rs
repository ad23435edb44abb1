//! Door State Machine
//!
//! This example walks a door through a fixed rule table.
//!
//! Key concepts:
//! - Rules declared in order with `simple_rule`
//! - Entities hold their own state; the machine only reads it
//! - Unmatched transitions are ordinary `NotAllowed` results
//!
//! Run with: cargo run --example door

use turnstile::builder::simple_rule;
use turnstile::machine::{StateMachine, Stateful, Tracked};
use turnstile::rules::RuleTable;
use turnstile::{event_enum, state_enum, Event, TransitionOutcome};

state_enum! {
    enum DoorState {
        Locked,
        Unlocked,
        Opened,
        Closed,
    }
}

event_enum! {
    enum DoorEvent {
        Lock = "lock",
        Unlock = "unlock",
        Open = "open",
        Close = "close",
    }
}

#[derive(Clone, Debug)]
struct Door {
    state: DoorState,
}

impl Stateful<DoorState> for Door {
    fn state(&self) -> &DoorState {
        &self.state
    }

    fn with_state(&self, state: DoorState) -> Self {
        Door { state }
    }
}

fn main() {
    println!("=== Door State Machine ===\n");

    let machine = StateMachine::stateful(RuleTable::new(vec![
        simple_rule(DoorState::Locked, DoorEvent::Unlock, DoorState::Unlocked),
        simple_rule(DoorState::Unlocked, DoorEvent::Lock, DoorState::Locked),
        simple_rule(DoorState::Unlocked, DoorEvent::Open, DoorState::Opened),
        simple_rule(DoorState::Opened, DoorEvent::Close, DoorState::Closed),
        simple_rule(DoorState::Closed, DoorEvent::Open, DoorState::Opened),
        simple_rule(DoorState::Closed, DoorEvent::Lock, DoorState::Locked),
    ]));

    let mut door = Tracked::new(Door {
        state: DoorState::Locked,
    });
    println!("Initial state: {:?}\n", door.entity().state);

    for event in [DoorEvent::Unlock, DoorEvent::Open, DoorEvent::Lock] {
        match door.fire(&machine, &event) {
            Ok(TransitionOutcome::Success(state)) => {
                println!("  {:<8} -> {:?}", event.name(), state)
            }
            Ok(TransitionOutcome::Failure(failure)) => {
                println!("  {:<8} -> refused ({})", event.name(), failure)
            }
            Err(fault) => println!("  {:<8} -> fault ({})", event.name(), fault),
        }
    }

    println!(
        "\nAvailable from {:?}: {:?}",
        door.entity().state,
        machine.available_events(door.entity())
    );
    println!("Path taken: {:?}", door.history().get_path());

    println!("\n=== Example Complete ===");
}

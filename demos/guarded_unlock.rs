//! Guarded Unlock
//!
//! This example computes a transition's destination from entity data.
//!
//! Key concepts:
//! - Guards see the whole entity, not just its state
//! - A rejecting guard is distinct from "no such transition"
//! - A custom state field via `StateAccessor`
//! - Auditing a table for rules that can never fire
//!
//! Run with: cargo run --example guarded_unlock

use stillwater::validation::Validation;
use turnstile::builder::{RuleBuilder, RuleTableBuilder};
use turnstile::machine::{StateAccessor, StateMachine};
use turnstile::{event_enum, state_enum, GuardError, TransitionOutcome};

state_enum! {
    enum Lock {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum LockEvent {
        Unlock = "unlock",
    }
}

#[derive(Clone, Debug)]
struct Keypad {
    lock: Lock,
    entered: String,
    secret: String,
}

fn check(pad: &Keypad) -> Result<Lock, GuardError> {
    if pad.entered == pad.secret {
        Ok(Lock::Unlocked)
    } else {
        Err(GuardError::rejected("invalid passcode"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Guarded Unlock Example ===\n");

    let table = RuleTableBuilder::new()
        .rule(
            RuleBuilder::new()
                .from(Lock::Locked)
                .on(LockEvent::Unlock)
                .decide(check),
        )?
        .rule(
            RuleBuilder::new()
                .from(Lock::Locked)
                .on(LockEvent::Unlock)
                .to(Lock::Locked),
        )?
        .build();

    let machine = StateMachine::new(
        table,
        StateAccessor::new(
            "lock",
            |pad: &Keypad| &pad.lock,
            |pad: &Keypad, lock| Keypad {
                lock,
                ..pad.clone()
            },
        ),
    );

    for entered in ["4711", "0000"] {
        let pad = Keypad {
            lock: Lock::Locked,
            entered: entered.to_string(),
            secret: "4711".to_string(),
        };

        match machine.apply(&pad, &LockEvent::Unlock)? {
            TransitionOutcome::Success(pad) => {
                println!("Code {entered}: lock is now {:?}", pad.lock)
            }
            TransitionOutcome::Failure(failure) => println!("Code {entered}: {failure}"),
        }
    }

    println!("\nAudit:");
    match machine.table().audit() {
        Validation::Success(_) => println!("  no findings"),
        Validation::Failure(findings) => {
            for finding in findings.iter() {
                println!("  - {finding}");
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

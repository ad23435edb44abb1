//! Builder API for ergonomic rule table construction.
//!
//! This module provides fluent builders, helper constructors and macros for
//! declaring rule tables with minimal boilerplate while keeping the
//! declaration order explicit.

pub mod error;
pub mod macros;
pub mod rule;
pub mod table;

pub use error::BuildError;
pub use rule::RuleBuilder;
pub use table::RuleTableBuilder;

use crate::core::{Event, GuardError, State};
use crate::rules::TransitionRule;

/// Create an unconditional `from --event--> to` rule.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_rule;
/// use turnstile::rules::TransitionRule;
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// event_enum! {
///     enum Tick {
///         Next = "next",
///     }
/// }
///
/// let rule: TransitionRule<Light, Tick, ()> = simple_rule(Light::Red, Tick::Next, Light::Green);
/// assert!(rule.matches(&Light::Red, &Tick::Next));
/// ```
pub fn simple_rule<S, Ev, E>(from: S, event: Ev, to: S) -> TransitionRule<S, Ev, E>
where
    S: State,
    Ev: Event,
{
    TransitionRule::fixed(from, event, to)
}

/// Create a `* --event--> to` rule matching every current state.
pub fn wildcard_rule<S, Ev, E>(event: Ev, to: S) -> TransitionRule<S, Ev, E>
where
    S: State,
    Ev: Event,
{
    TransitionRule::any(event, to)
}

/// Create a rule whose destination is computed from the entity.
///
/// # Example
///
/// ```
/// use turnstile::builder::guarded_rule;
/// use turnstile::core::GuardError;
/// use turnstile::rules::TransitionRule;
///
/// struct Keypad {
///     entered: u32,
/// }
///
/// let rule: TransitionRule<String, String, Keypad> =
///     guarded_rule("locked".into(), "unlock".into(), |pad: &Keypad| {
///         if pad.entered == 1234 {
///             Ok("unlocked".to_string())
///         } else {
///             Err(GuardError::rejected("invalid passcode"))
///         }
///     });
/// assert!(rule.is_guarded());
/// ```
pub fn guarded_rule<S, Ev, E, F>(from: S, event: Ev, decide: F) -> TransitionRule<S, Ev, E>
where
    S: State,
    Ev: Event,
    F: Fn(&E) -> Result<S, GuardError> + Send + Sync + 'static,
{
    TransitionRule::guarded(from, event, decide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Source;

    #[test]
    fn simple_rule_builds() {
        let rule: TransitionRule<String, String, ()> =
            simple_rule("start".into(), "go".into(), "middle".into());

        assert_eq!(rule.source, Source::State("start".to_string()));
        assert!(rule.matches(&"start".to_string(), &"go".to_string()));
        assert!(!rule.is_guarded());
    }

    #[test]
    fn wildcard_rule_matches_any_state() {
        let rule: TransitionRule<String, String, ()> = wildcard_rule("reset".into(), "idle".into());

        assert!(rule.matches(&"busy".to_string(), &"reset".to_string()));
        assert!(rule.matches(&"idle".to_string(), &"reset".to_string()));
    }

    #[test]
    fn guarded_rule_is_guarded() {
        let rule: TransitionRule<String, String, i32> =
            guarded_rule("start".into(), "go".into(), |n: &i32| {
                if *n > 0 {
                    Ok("middle".to_string())
                } else {
                    Err(GuardError::rejected("non-positive"))
                }
            });

        assert!(rule.is_guarded());
    }
}

//! Event identifiers that trigger transitions.

use std::fmt::Debug;

/// Trait for events (triggers) requested by a caller.
///
/// Events are matched by exact equality. There is no wildcard on the
/// event side of a rule.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Event;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorEvent {
///     Lock,
///     Unlock,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Lock => "lock",
///             Self::Unlock => "unlock",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Unlock.name(), "unlock");
/// ```
pub trait Event: Clone + PartialEq + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}

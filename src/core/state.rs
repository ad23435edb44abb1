//! Core State trait for state machine states.
//!
//! A state is an opaque, comparable token. Matching is exact equality;
//! there is no hierarchy between states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values; the engine only ever
/// compares them for equality and clones them into outcomes.
///
/// # Required Traits
///
/// - `Clone`: states are handed back to the caller as outcomes
/// - `PartialEq`: rule sources are matched by equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition history is serializable
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Locked,
///     Unlocked,
///     Opened,
///     Broken,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///             Self::Opened => "Opened",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are not treated specially during resolution; the
    /// rule-table audit reports rules that leave them.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Dynamic state tokens for data-driven rule sets.
impl State for String {
    fn name(&self) -> &str {
        self
    }
}

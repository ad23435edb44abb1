//! Reading and replacing the state field of an entity.

use crate::core::State;
use std::fmt;
use std::sync::Arc;

/// Entities that expose their state through a conventional `state` field.
///
/// # Example
///
/// ```rust
/// use turnstile::machine::Stateful;
///
/// #[derive(Clone)]
/// struct Door {
///     state: String,
///     code: u32,
/// }
///
/// impl Stateful<String> for Door {
///     fn state(&self) -> &String {
///         &self.state
///     }
///
///     fn with_state(&self, state: String) -> Self {
///         Self { state, ..self.clone() }
///     }
/// }
/// ```
pub trait Stateful<S: State> {
    fn state(&self) -> &S;

    /// A copy of `self` with the state replaced.
    fn with_state(&self, state: S) -> Self;
}

type Getter<E, S> = dyn Fn(&E) -> &S + Send + Sync;
type Setter<E, S> = dyn Fn(&E, S) -> E + Send + Sync;

/// Accessor/updater pair for the field holding an entity's state.
///
/// The field name is informational (logs and diagnostics); the closures do
/// the actual work, so any entity shape can be driven.
pub struct StateAccessor<E, S: State> {
    field: String,
    get: Arc<Getter<E, S>>,
    set: Arc<Setter<E, S>>,
}

impl<E, S: State> StateAccessor<E, S> {
    /// Accessor for an arbitrary field.
    ///
    /// ```rust
    /// use turnstile::machine::StateAccessor;
    ///
    /// #[derive(Clone)]
    /// struct Ticket {
    ///     status: String,
    ///     title: String,
    /// }
    ///
    /// let status = StateAccessor::new(
    ///     "status",
    ///     |t: &Ticket| &t.status,
    ///     |t: &Ticket, status| Ticket { status, ..t.clone() },
    /// );
    ///
    /// let ticket = Ticket { status: "open".into(), title: "leak".into() };
    /// assert_eq!(status.field(), "status");
    /// assert_eq!(status.get(&ticket), "open");
    /// assert_eq!(status.set(&ticket, "closed".into()).status, "closed");
    /// ```
    pub fn new<G, U>(field: impl Into<String>, get: G, set: U) -> Self
    where
        G: Fn(&E) -> &S + Send + Sync + 'static,
        U: Fn(&E, S) -> E + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn get<'a>(&self, entity: &'a E) -> &'a S {
        (self.get)(entity)
    }

    pub fn set(&self, entity: &E, state: S) -> E {
        (self.set)(entity, state)
    }

    /// Same accessor reported under a different field name.
    pub fn renamed(self, field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..self
        }
    }
}

impl<E: Stateful<S> + 'static, S: State + 'static> StateAccessor<E, S> {
    /// Accessor backed by [`Stateful`], reporting the field as `state`.
    pub fn stateful() -> Self {
        Self::new(
            "state",
            |entity: &E| entity.state(),
            |entity: &E, state| entity.with_state(state),
        )
    }
}

impl<E, S: State> Clone for StateAccessor<E, S> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<E, S: State> fmt::Debug for StateAccessor<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateAccessor")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

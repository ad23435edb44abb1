//! Macros for declaring closed sets of states and events.

/// Generate a `State` implementation for a simple enum.
///
/// The enum derives `Clone`, `PartialEq`, `Debug` and serde's
/// `Serialize`/`Deserialize`, so the calling crate needs `serde` with the
/// `derive` feature.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
/// use turnstile::core::State;
///
/// state_enum! {
///     pub enum DoorState {
///         Locked,
///         Unlocked,
///         Demolished,
///     }
///     final: [Demolished]
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert!(DoorState::Demolished.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// Each variant may name itself with `= "name"`; otherwise the variant
/// identifier is used.
///
/// # Example
///
/// ```
/// use turnstile::event_enum;
/// use turnstile::core::Event;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Lock = "lock",
///         Unlock = "unlock",
///         Knock,
///     }
/// }
///
/// assert_eq!(DoorEvent::Unlock.name(), "unlock");
/// assert_eq!(DoorEvent::Knock.name(), "Knock");
/// ```
#[macro_export]
macro_rules! event_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::event_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}

//! Macros for declaring machine states.

/// Generate a unit enum together with its `State` implementation.
///
/// # Example
///
/// ```
/// use vendmill::state_enum;
/// use vendmill::core::State;
///
/// state_enum! {
///     pub enum Door {
///         Closed,
///         Opening,
///         Open,
///         Broken,
///     }
///     transient: [Opening]
///     exhausted: [Broken]
/// }
///
/// assert_eq!(Door::Opening.name(), "Opening");
/// assert!(Door::Opening.is_transient());
/// assert!(Door::Broken.is_exhausted());
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

        $(transient: [$($transient:ident),* $(,)?])?
        $(exhausted: [$($exhausted:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            #[allow(unreachable_patterns)]
            fn is_transient(&self) -> bool {
                match self {
                    $($(Self::$transient => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_exhausted(&self) -> bool {
                match self {
                    $($(Self::$exhausted => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

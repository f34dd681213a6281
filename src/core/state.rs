//! Core State trait for machine states.
//!
//! Every state a machine can occupy implements this trait, which exposes
//! pure queries about the state without touching the machine itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure. A state value only describes where a machine is;
/// the machine owns any counters and passes them to the transition logic.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: states are compared by transition logic and tests
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: history can be exported
///
/// # Example
///
/// ```rust
/// use vendmill::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turnstile {
///     Locked,
///     Unlocked,
///     Rotating,
///     Jammed,
/// }
///
/// impl State for Turnstile {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///             Self::Rotating => "Rotating",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_transient(&self) -> bool {
///         matches!(self, Self::Rotating)
///     }
///
///     fn is_exhausted(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state only exists while an operation is in flight.
    ///
    /// Transient states are entered and left within a single call, so a
    /// caller never observes a machine resting in one.
    ///
    /// Default implementation returns `false`.
    fn is_transient(&self) -> bool {
        false
    }

    /// Check if this state can no longer serve requests.
    ///
    /// Default implementation returns `false`.
    fn is_exhausted(&self) -> bool {
        false
    }
}

//! Command registry errors.

use thiserror::Error;

/// Errors raised by [`CommandRegistry`](super::CommandRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Slot index outside `0..slot_count`
    #[error("Slot {index} is out of range, the registry has {slot_count} slots")]
    OutOfRange { index: usize, slot_count: usize },
}

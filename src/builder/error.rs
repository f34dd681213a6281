//! Errors raised while building a vending machine.

use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Inventory not specified. Call .inventory(count) before .build()")]
    MissingInventory,

    #[error("Inventory must not be negative, got {0}")]
    NegativeInventory(i64),

    #[error("Inventory {0} exceeds the largest supported stock of {max}", max = u32::MAX)]
    InventoryTooLarge(i64),

    #[error("Prize odds must be at least 1")]
    ZeroPrizeOdds,

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("{} configuration errors: {}", .0.len(), join(.0))]
    Invalid(Vec<BuildError>),
}

impl BuildError {
    /// Flatten into the individual violations.
    pub fn violations(&self) -> Vec<&BuildError> {
        match self {
            Self::Invalid(errors) => errors.iter().flat_map(BuildError::violations).collect(),
            other => vec![other],
        }
    }
}

fn join(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

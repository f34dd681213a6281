//! Builder API for constructing vending machines.
//!
//! This module provides the fluent [`VendingMachineBuilder`], its
//! [`BuildError`], and the [`state_enum!`](crate::state_enum) macro used to
//! declare machine states.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;

use crate::config::MachineConfig;
use crate::vending::{SeededDraw, VendingMachine};

/// Build a machine with `inventory` units and reproducible prize draws.
///
/// # Example
///
/// ```
/// use vendmill::builder::seeded_machine;
/// use vendmill::vending::VendingState;
///
/// let machine = seeded_machine(3, 42);
/// assert_eq!(machine.state(), VendingState::NoPayment);
/// ```
pub fn seeded_machine(inventory: u32, seed: u64) -> VendingMachine {
    VendingMachine::from_parts(
        inventory,
        MachineConfig::default(),
        Box::new(SeededDraw::new(seed)),
    )
}

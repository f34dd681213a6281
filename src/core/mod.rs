//! Core state machine types.
//!
//! This module contains the pieces shared by any machine in the crate:
//! - State definitions via the `State` trait
//! - Immutable, optionally bounded history tracking
//!
//! Nothing here mutates a machine; machines own their current state and
//! record into a history value.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;

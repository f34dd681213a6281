//! Undoable command dispatch.
//!
//! A [`CommandRegistry`] maps slot indices to (activate, deactivate)
//! [`Action`] pairs, runs them on request and can undo the most recent one.
//! [`Macro`] groups several actions into one.

mod action;
mod error;
mod registry;

pub use action::{Action, FnAction, Macro, NoOp};
pub use error::CommandError;
pub use registry::CommandRegistry;

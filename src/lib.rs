//! Vendmill: a vending state machine and an undoable command registry
//!
//! The crate holds two independent components:
//!
//! - **Vending machine**: a stock of units and a current state. Every call
//!   is dispatched to the current state, which decides the next state and
//!   what to report. Activating a paid machine runs a prize draw; a win
//!   releases two units instead of one.
//! - **Command registry**: slots of (activate, deactivate) actions with a
//!   remembered last action and single-level undo.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Transition**: A pure function from (state, inventory, event) to the
//!   next state, inventory and notices
//! - **History**: Immutable tracking of state changes over time
//! - **Action**: An invocable unit of behavior with a defined inverse
//!
//! # Example
//!
//! ```rust
//! use vendmill::vending::{Notice, ScriptedDraw, VendingMachine, VendingState};
//!
//! let mut machine = VendingMachine::builder()
//!     .inventory(2)
//!     .draw(ScriptedDraw::winning())
//!     .build()
//!     .unwrap();
//!
//! machine.insert_payment();
//! let outcome = machine.activate();
//!
//! assert!(outcome.contains(Notice::PrizeWon));
//! assert_eq!(machine.inventory(), 0);
//! assert_eq!(machine.state(), VendingState::SoldOut);
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod core;
pub mod vending;

// Re-export commonly used types
pub use builder::{BuildError, VendingMachineBuilder};
pub use command::{Action, CommandError, CommandRegistry, FnAction, Macro, NoOp};
pub use config::MachineConfig;
pub use crate::core::{State, StateHistory, StateTransition};
pub use vending::{Event, Notice, Outcome, PrizeDraw, VendingMachine, VendingState};

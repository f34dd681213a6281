//! Vending machine with a probabilistic prize.
//!
//! The machine owns its inventory and current [`VendingState`]. Each
//! operation becomes an [`Event`] that the current state answers through
//! [`VendingState::on_event`], a pure function returning the next state,
//! the new inventory and the [`Notice`]s to report.
//!
//! Prize draws come from an injectable [`PrizeDraw`] so tests can pin the
//! outcome of every activation.

mod draw;
mod event;
mod machine;
mod state;
mod transition;

pub use draw::{PrizeDraw, ScriptedDraw, SeededDraw, ThreadDraw};
pub use event::{Event, Notice, Outcome};
pub use machine::VendingMachine;
pub use state::VendingState;
pub use transition::Step;

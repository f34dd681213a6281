//! Vending machine that drives the pure transition function.

use super::draw::{PrizeDraw, ThreadDraw};
use super::event::{Event, Outcome};
use super::state::VendingState;
use crate::builder::{BuildError, VendingMachineBuilder};
use crate::config::MachineConfig;
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use log::{debug, info, trace};
use std::fmt;

/// A vending machine holding a stock of units.
///
/// Every public operation is callable in every state. Calls that make no
/// sense in the current state report a rejection notice and change nothing.
/// The current state can be read but never set from outside.
///
/// # Example
///
/// ```rust
/// use vendmill::vending::{Notice, ScriptedDraw, VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::builder()
///     .inventory(5)
///     .draw(ScriptedDraw::losing())
///     .build()
///     .unwrap();
///
/// machine.insert_payment();
/// let outcome = machine.activate();
///
/// assert!(outcome.contains(Notice::UnitReleased));
/// assert_eq!(machine.inventory(), 4);
/// assert_eq!(machine.state(), VendingState::NoPayment);
/// ```
pub struct VendingMachine {
    state: VendingState,
    inventory: u32,
    dispensed: u64,
    prize_odds: u32,
    draw: Box<dyn PrizeDraw + Send>,
    history: StateHistory<VendingState>,
    sequence: u64,
}

impl VendingMachine {
    /// Create a machine with default configuration and thread-local draws.
    pub fn new(inventory: u32) -> Self {
        Self::from_parts(inventory, MachineConfig::default(), Box::new(ThreadDraw))
    }

    /// Create a machine from a signed count, rejecting negative stock.
    pub fn with_inventory(inventory: i64) -> Result<Self, BuildError> {
        VendingMachineBuilder::new().inventory(inventory).build()
    }

    pub fn builder() -> VendingMachineBuilder {
        VendingMachineBuilder::new()
    }

    /// Assemble a machine from already validated parts.
    pub(crate) fn from_parts(
        inventory: u32,
        config: MachineConfig,
        draw: Box<dyn PrizeDraw + Send>,
    ) -> Self {
        let state = VendingState::initial(inventory);
        info!(
            "vending machine created with {} units in {} (prize odds 1/{})",
            inventory,
            state.name(),
            config.prize_odds
        );
        Self {
            state,
            inventory,
            dispensed: 0,
            prize_odds: config.prize_odds,
            draw,
            history: StateHistory::with_limit(config.history_limit),
            sequence: 0,
        }
    }

    pub fn insert_payment(&mut self) -> Outcome {
        self.dispatch(Event::InsertPayment)
    }

    pub fn eject_payment(&mut self) -> Outcome {
        self.dispatch(Event::EjectPayment)
    }

    /// Turn the crank.
    ///
    /// The activation is handled first, then whatever state it produced
    /// dispenses. Both halves report into the same outcome.
    pub fn activate(&mut self) -> Outcome {
        let activated = self.dispatch(Event::Activate);
        let dispensed = self.dispatch(Event::Dispense);
        activated.merge(dispensed)
    }

    fn dispatch(&mut self, event: Event) -> Outcome {
        let from = self.state;
        let odds = self.prize_odds;
        let draw = &mut self.draw;
        let step = from.on_event(self.inventory, event, || {
            let ticket = draw.draw(odds);
            debug!("prize draw returned ticket {ticket} of {odds}");
            ticket
        });

        self.inventory = step.inventory;
        self.dispensed += u64::from(step.dispensed);

        if step.state != from {
            self.sequence += 1;
            debug!(
                "{} moved {} -> {} ({} units left)",
                event,
                from.name(),
                step.state.name(),
                self.inventory
            );
            self.history = self.history.record(StateTransition {
                from,
                to: step.state,
                trigger: event.name().to_string(),
                timestamp: Utc::now(),
                sequence: self.sequence,
            });
            self.state = step.state;
        } else {
            trace!("{} left {} unchanged", event, from.name());
        }

        Outcome {
            notices: step.notices,
            dispensed: step.dispensed,
        }
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    /// Units released over the machine's lifetime.
    pub fn dispensed(&self) -> u64 {
        self.dispensed
    }

    pub fn prize_odds(&self) -> u32 {
        self.prize_odds
    }

    pub fn history(&self) -> &StateHistory<VendingState> {
        &self.history
    }

    pub fn is_sold_out(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl fmt::Display for VendingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vending machine with {} units left", self.inventory)
    }
}

impl fmt::Debug for VendingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendingMachine")
            .field("state", &self.state)
            .field("inventory", &self.inventory)
            .field("dispensed", &self.dispensed)
            .field("prize_odds", &self.prize_odds)
            .finish_non_exhaustive()
    }
}

//! Pure transition function for the vending machine.
//!
//! Each state answers every event. The machine's inventory is passed in and
//! handed back in the [`Step`], so no state ever holds a reference to the
//! machine it belongs to.

use super::event::{Event, Notice};
use super::state::VendingState;

/// Result of dispatching one event to one state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub state: VendingState,
    pub inventory: u32,
    pub notices: Vec<Notice>,
    pub dispensed: u32,
}

impl Step {
    fn empty(state: VendingState, inventory: u32) -> Self {
        Self {
            state,
            inventory,
            notices: Vec::new(),
            dispensed: 0,
        }
    }

    fn to(state: VendingState, inventory: u32, notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Self::empty(state, inventory)
        }
    }

    fn release(&mut self) {
        if self.inventory > 0 {
            self.inventory -= 1;
            self.dispensed += 1;
            self.notices.push(Notice::UnitReleased);
        }
    }

    fn settle(&mut self) {
        if self.inventory > 0 {
            self.state = VendingState::NoPayment;
        } else {
            self.notices.push(Notice::OutOfStock);
            self.state = VendingState::SoldOut;
        }
    }
}

impl VendingState {
    /// Dispatch `event` to this state.
    ///
    /// `draw` is consulted only when a paid machine is activated; it must
    /// return a ticket where zero wins. A winning ticket only counts while
    /// more than one unit is in stock.
    pub fn on_event<F>(self, inventory: u32, event: Event, draw: F) -> Step
    where
        F: FnOnce() -> u32,
    {
        use Event::*;
        use VendingState::*;

        match (self, event) {
            (NoPayment, InsertPayment) => Step::to(HasPayment, inventory, Notice::PaymentAccepted),
            (NoPayment, EjectPayment) => Step::to(self, inventory, Notice::NoPaymentToEject),
            (NoPayment, Activate) => Step::to(self, inventory, Notice::ActivatedWithoutPayment),
            (NoPayment, Dispense) => Step::to(self, inventory, Notice::PaymentRequired),

            (HasPayment, InsertPayment) => {
                Step::to(self, inventory, Notice::PaymentAlreadyInserted)
            }
            (HasPayment, EjectPayment) => Step::to(NoPayment, inventory, Notice::PaymentReturned),
            (HasPayment, Activate) => {
                let next = if draw() == 0 && inventory > 1 {
                    Winner
                } else {
                    Dispensing
                };
                Step::to(next, inventory, Notice::Activated)
            }
            (HasPayment, Dispense) => Step::to(self, inventory, Notice::NothingDispensed),

            (SoldOut, InsertPayment) => Step::to(self, inventory, Notice::SoldOutRejectsPayment),
            (SoldOut, EjectPayment) => Step::to(self, inventory, Notice::NothingToEject),
            (SoldOut, Activate) => Step::to(self, inventory, Notice::ActivatedWhileSoldOut),
            (SoldOut, Dispense) => Step::to(self, inventory, Notice::NothingDispensed),

            (Dispensing | Winner, InsertPayment) => {
                Step::to(self, inventory, Notice::DispenseInProgress)
            }
            (Dispensing | Winner, EjectPayment) => {
                Step::to(self, inventory, Notice::AlreadyActivated)
            }
            (Dispensing | Winner, Activate) => Step::to(self, inventory, Notice::ActivatedTwice),

            (Dispensing, Dispense) => {
                let mut step = Step::empty(self, inventory);
                step.release();
                step.settle();
                step
            }
            (Winner, Dispense) => {
                let mut step = Step::empty(self, inventory);
                step.release();
                if step.inventory == 0 {
                    step.state = SoldOut;
                    return step;
                }
                step.release();
                step.notices.push(Notice::PrizeWon);
                step.settle();
                step
            }
        }
    }
}

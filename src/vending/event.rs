//! Events a vending machine reacts to and the notices it reports back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External or internal stimulus dispatched to the current state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Event {
    InsertPayment,
    EjectPayment,
    /// Turn the crank.
    Activate,
    /// Follows every `Activate`; never sent by callers directly.
    Dispense,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertPayment => "insert_payment",
            Self::EjectPayment => "eject_payment",
            Self::Activate => "activate",
            Self::Dispense => "dispense",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Informational message produced while handling an event.
///
/// Calls made in the wrong state are not errors; they yield one of the
/// rejection notices and leave the machine unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Notice {
    PaymentAccepted,
    PaymentAlreadyInserted,
    SoldOutRejectsPayment,
    DispenseInProgress,
    PaymentReturned,
    NoPaymentToEject,
    NothingToEject,
    AlreadyActivated,
    Activated,
    ActivatedWithoutPayment,
    ActivatedWhileSoldOut,
    ActivatedTwice,
    UnitReleased,
    PrizeWon,
    OutOfStock,
    PaymentRequired,
    NothingDispensed,
}

impl Notice {
    /// Whether this notice reports an event the current state refused.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::PaymentAlreadyInserted
                | Self::SoldOutRejectsPayment
                | Self::DispenseInProgress
                | Self::NoPaymentToEject
                | Self::NothingToEject
                | Self::AlreadyActivated
                | Self::ActivatedWithoutPayment
                | Self::ActivatedWhileSoldOut
                | Self::ActivatedTwice
                | Self::PaymentRequired
                | Self::NothingDispensed
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::PaymentAccepted => "You inserted a payment",
            Self::PaymentAlreadyInserted => "There is already a payment. You cannot insert another",
            Self::SoldOutRejectsPayment => "You cannot insert a payment, the machine is sold out",
            Self::DispenseInProgress => "Please wait, we are already giving you a unit",
            Self::PaymentReturned => "Payment returned",
            Self::NoPaymentToEject => "You have not inserted a payment",
            Self::NothingToEject => "You cannot eject, you have not inserted a payment yet",
            Self::AlreadyActivated => "Sorry, you already turned the crank",
            Self::Activated => "You turned...",
            Self::ActivatedWithoutPayment => "You turned, but there is no payment",
            Self::ActivatedWhileSoldOut => "You turned, but there are no units left",
            Self::ActivatedTwice => "Turning twice does not give you another unit",
            Self::UnitReleased => "A unit comes rolling out the slot...",
            Self::PrizeWon => "You are a winner. You got two units for your payment",
            Self::OutOfStock => "Oops, out of units",
            Self::PaymentRequired => "You need to pay first",
            Self::NothingDispensed => "No unit dispensed",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a single public operation produced.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// Notices in the order they were raised.
    pub notices: Vec<Notice>,
    /// Units released during the operation.
    pub dispensed: u32,
}

impl Outcome {
    pub fn contains(&self, notice: Notice) -> bool {
        self.notices.contains(&notice)
    }

    /// True when every notice was a rejection.
    pub fn is_rejected(&self) -> bool {
        !self.notices.is_empty() && self.notices.iter().all(Notice::is_rejection)
    }

    pub(crate) fn merge(mut self, other: Outcome) -> Outcome {
        self.notices.extend(other.notices);
        self.dispensed += other.dispensed;
        self
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, notice) in self.notices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{notice}")?;
        }
        Ok(())
    }
}

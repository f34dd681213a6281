//! States of a vending machine.

use crate::state_enum;

state_enum! {
    /// Behavior mode of a [`VendingMachine`](super::VendingMachine).
    ///
    /// `Dispensing` and `Winner` are only entered while an activation is
    /// being handled; between calls the machine rests in `SoldOut`,
    /// `NoPayment` or `HasPayment`.
    pub enum VendingState {
        SoldOut,
        NoPayment,
        HasPayment,
        Dispensing,
        Winner,
    }
    transient: [Dispensing, Winner]
    exhausted: [SoldOut]
}

impl VendingState {
    /// State a freshly stocked machine starts in.
    pub fn initial(inventory: u32) -> Self {
        if inventory > 0 {
            Self::NoPayment
        } else {
            Self::SoldOut
        }
    }
}

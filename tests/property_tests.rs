//! Property-based tests for the vending machine and command registry.
//!
//! These tests use proptest to drive both components with arbitrary call
//! sequences and check the invariants that must hold after every call.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use vendmill::command::{Action, CommandError, CommandRegistry, FnAction, Macro};
use vendmill::core::State;
use vendmill::vending::{Event, ScriptedDraw, VendingMachine, VendingState};

#[derive(Clone, Copy, Debug)]
enum Call {
    Insert,
    Eject,
    Activate,
}

prop_compose! {
    fn arbitrary_call()(variant in 0..3u8) -> Call {
        match variant {
            0 => Call::Insert,
            1 => Call::Eject,
            _ => Call::Activate,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..5u8) -> VendingState {
        match variant {
            0 => VendingState::SoldOut,
            1 => VendingState::NoPayment,
            2 => VendingState::HasPayment,
            3 => VendingState::Dispensing,
            _ => VendingState::Winner,
        }
    }
}

fn machine(inventory: u32, tickets: Vec<u32>) -> VendingMachine {
    VendingMachine::builder()
        .inventory(i64::from(inventory))
        .draw(ScriptedDraw::new(tickets))
        .build()
        .unwrap()
}

fn apply(machine: &mut VendingMachine, call: Call) {
    match call {
        Call::Insert => machine.insert_payment(),
        Call::Eject => machine.eject_payment(),
        Call::Activate => machine.activate(),
    };
}

type Journal = Arc<Mutex<Vec<String>>>;

fn recording(name: &str, journal: &Journal) -> Arc<dyn Action> {
    let (fwd, inv) = (Arc::clone(journal), Arc::clone(journal));
    let (fwd_entry, inv_entry) = (name.to_string(), format!("{name}'"));
    Arc::new(FnAction::new(
        name,
        move || fwd.lock().unwrap().push(fwd_entry.clone()),
        move || inv.lock().unwrap().push(inv_entry.clone()),
    ))
}

proptest! {
    #[test]
    fn stock_is_conserved(
        inventory in 0..40u32,
        tickets in prop::collection::vec(0..10u32, 1..8),
        calls in prop::collection::vec(arbitrary_call(), 0..60),
    ) {
        let mut machine = machine(inventory, tickets);
        let mut previous = inventory;

        for call in calls {
            apply(&mut machine, call);
            prop_assert!(machine.inventory() <= previous);
            prop_assert_eq!(u64::from(machine.inventory()) + machine.dispensed(), u64::from(inventory));
            previous = machine.inventory();
        }
    }

    #[test]
    fn sold_out_exactly_when_empty(
        inventory in 0..20u32,
        tickets in prop::collection::vec(0..10u32, 1..8),
        calls in prop::collection::vec(arbitrary_call(), 0..60),
    ) {
        let mut machine = machine(inventory, tickets);
        prop_assert_eq!(machine.is_sold_out(), machine.inventory() == 0);

        for call in calls {
            apply(&mut machine, call);
            prop_assert_eq!(machine.state() == VendingState::SoldOut, machine.inventory() == 0);
            prop_assert!(!machine.state().is_transient());
        }
    }

    #[test]
    fn losing_purchase_takes_exactly_one(inventory in 2..100u32, ticket in 1..10u32) {
        let mut machine = machine(inventory, vec![ticket]);
        machine.insert_payment();
        let outcome = machine.activate();

        prop_assert_eq!(outcome.dispensed, 1);
        prop_assert_eq!(machine.inventory(), inventory - 1);
        prop_assert_eq!(machine.state(), VendingState::NoPayment);
    }

    #[test]
    fn winning_purchase_takes_exactly_two(inventory in 2..100u32) {
        let mut machine = machine(inventory, vec![0]);
        machine.insert_payment();
        let outcome = machine.activate();

        prop_assert_eq!(outcome.dispensed, 2);
        prop_assert_eq!(machine.inventory(), inventory - 2);
        let expected = if inventory > 2 { VendingState::NoPayment } else { VendingState::SoldOut };
        prop_assert_eq!(machine.state(), expected);
    }

    #[test]
    fn rejected_events_change_nothing(
        state in arbitrary_state(),
        inventory in 0..10u32,
    ) {
        for event in [Event::InsertPayment, Event::EjectPayment, Event::Activate, Event::Dispense] {
            let step = state.on_event(inventory, event, || 5);
            if !step.notices.is_empty() && step.notices.iter().all(|n| n.is_rejection()) {
                prop_assert_eq!(step.state, state);
                prop_assert_eq!(step.inventory, inventory);
                prop_assert_eq!(step.dispensed, 0);
            }
        }
    }

    #[test]
    fn history_matches_state_changes(
        inventory in 1..20u32,
        calls in prop::collection::vec(arbitrary_call(), 0..40),
    ) {
        let mut machine = machine(inventory, vec![3, 0, 7]);
        for call in calls {
            apply(&mut machine, call);
        }

        let history = machine.history();
        for pair in history.transitions().windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
            prop_assert!(pair[0].sequence < pair[1].sequence);
        }
        if let Some(last) = history.last() {
            prop_assert_eq!(last.to, machine.state());
        }
    }

    #[test]
    fn undo_reverses_the_last_trigger(
        slot_count in 1..6usize,
        presses in prop::collection::vec((0..8usize, any::<bool>()), 1..20),
    ) {
        let journal = Journal::default();
        let mut registry = CommandRegistry::new(slot_count);
        for index in 0..slot_count {
            registry
                .bind(
                    index,
                    recording(&format!("on{index}"), &journal),
                    recording(&format!("off{index}"), &journal),
                )
                .unwrap();
        }

        let mut last: Option<String> = None;
        for (index, activate) in presses {
            let result = if activate {
                registry.trigger_activate(index)
            } else {
                registry.trigger_deactivate(index)
            };

            if index < slot_count {
                prop_assert!(result.is_ok());
                last = Some(format!("{}{index}", if activate { "on" } else { "off" }));
            } else {
                prop_assert_eq!(result, Err(CommandError::OutOfRange { index, slot_count }));
            }
        }

        let before = journal.lock().unwrap().len();
        registry.undo();
        let after = journal.lock().unwrap().clone();

        match last {
            Some(name) => {
                prop_assert_eq!(after.len(), before + 1);
                prop_assert_eq!(after.last().cloned(), Some(format!("{name}'")));
            }
            None => {
                prop_assert_eq!(after.len(), before);
            }
        }
    }

    #[test]
    fn macro_undo_follows_forward_order(names in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let journal = Journal::default();
        let members: Vec<Arc<dyn Action>> = names.iter().map(|n| recording(n, &journal)).collect();
        let group = Macro::new("group", members);

        group.execute();
        group.undo();

        let mut expected: Vec<String> = names.clone();
        expected.extend(names.iter().map(|n| format!("{n}'")));
        prop_assert_eq!(journal.lock().unwrap().clone(), expected);
    }
}

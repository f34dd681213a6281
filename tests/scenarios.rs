use std::sync::{Arc, Mutex};
use vendmill::command::{Action, CommandRegistry, FnAction, Macro};
use vendmill::vending::{Notice, ScriptedDraw, VendingMachine, VendingState};
use vendmill::BuildError;

/// Light that writes its switches into a shared transcript.
#[derive(Clone)]
struct Light {
    location: &'static str,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl Light {
    fn on(&self) {
        let line = format!("{} light is on", self.location);
        self.transcript.lock().unwrap().push(line);
    }

    fn off(&self) {
        let line = format!("{} light is off", self.location);
        self.transcript.lock().unwrap().push(line);
    }

    fn switch_on(&self) -> Arc<dyn Action> {
        let (a, b) = (self.clone(), self.clone());
        Arc::new(FnAction::new(
            format!("{} on", self.location),
            move || a.on(),
            move || b.off(),
        ))
    }

    fn switch_off(&self) -> Arc<dyn Action> {
        let (a, b) = (self.clone(), self.clone());
        Arc::new(FnAction::new(
            format!("{} off", self.location),
            move || a.off(),
            move || b.on(),
        ))
    }
}

fn machine(inventory: i64, draw: ScriptedDraw) -> VendingMachine {
    VendingMachine::builder()
        .inventory(inventory)
        .draw(draw)
        .build()
        .unwrap()
}

#[test]
fn remote_control_session() {
    let _ = env_logger::try_init();
    let transcript = Arc::new(Mutex::new(Vec::new()));
    let living = Light {
        location: "Living Room",
        transcript: Arc::clone(&transcript),
    };
    let kitchen = Light {
        location: "Kitchen",
        transcript: Arc::clone(&transcript),
    };

    let mut remote = CommandRegistry::new(3);
    remote
        .bind(0, living.switch_on(), living.switch_off())
        .unwrap();
    remote
        .bind(1, kitchen.switch_on(), kitchen.switch_off())
        .unwrap();
    remote
        .bind(
            2,
            Arc::new(Macro::new(
                "all on",
                vec![living.switch_on(), kitchen.switch_on()],
            )),
            Arc::new(Macro::new(
                "all off",
                vec![living.switch_off(), kitchen.switch_off()],
            )),
        )
        .unwrap();

    remote.trigger_activate(1).unwrap();
    remote.trigger_deactivate(1).unwrap();
    remote.trigger_activate(0).unwrap();
    remote.trigger_deactivate(0).unwrap();
    remote.trigger_activate(2).unwrap();
    remote.trigger_deactivate(2).unwrap();
    remote.undo();

    let lines = transcript.lock().unwrap().clone();
    assert_eq!(
        lines,
        vec![
            "Kitchen light is on",
            "Kitchen light is off",
            "Living Room light is on",
            "Living Room light is off",
            "Living Room light is on",
            "Kitchen light is on",
            "Living Room light is off",
            "Kitchen light is off",
            "Living Room light is on",
            "Kitchen light is on",
        ]
    );
    assert_eq!(remote.last_invoked().name(), "all off");
    assert_eq!(remote.invocations(), 7);
}

#[test]
fn single_unit_never_wins() {
    let _ = env_logger::try_init();
    let mut machine = machine(1, ScriptedDraw::winning());

    machine.insert_payment();
    let outcome = machine.activate();

    assert!(!outcome.contains(Notice::PrizeWon));
    assert_eq!(outcome.dispensed, 1);
    assert_eq!(machine.state(), VendingState::SoldOut);

    let path = machine.history().get_path();
    assert!(!path.contains(&&VendingState::Winner));
    assert!(path.contains(&&VendingState::Dispensing));
}

#[test]
fn winner_path_is_recorded() {
    let mut machine = machine(4, ScriptedDraw::winning());

    machine.insert_payment();
    machine.activate();

    let path = machine.history().get_path();
    assert_eq!(
        path,
        vec![
            &VendingState::NoPayment,
            &VendingState::HasPayment,
            &VendingState::Winner,
            &VendingState::NoPayment,
        ]
    );
    assert_eq!(machine.inventory(), 2);
}

#[test]
fn selling_out_then_rejecting() {
    let mut machine = machine(2, ScriptedDraw::losing());

    for _ in 0..2 {
        assert_eq!(machine.insert_payment().notices, vec![Notice::PaymentAccepted]);
        machine.activate();
    }
    assert_eq!(machine.state(), VendingState::SoldOut);
    assert_eq!(machine.dispensed(), 2);

    let outcome = machine.insert_payment();
    assert_eq!(outcome.notices, vec![Notice::SoldOutRejectsPayment]);
    assert_eq!(
        machine.eject_payment().notices,
        vec![Notice::NothingToEject]
    );
    assert_eq!(
        machine.activate().notices,
        vec![Notice::ActivatedWhileSoldOut, Notice::NothingDispensed]
    );
    assert_eq!(machine.to_string(), "Vending machine with 0 units left");
}

#[test]
fn payment_round_trip() {
    let mut machine = machine(3, ScriptedDraw::losing());

    assert_eq!(machine.insert_payment().notices, vec![Notice::PaymentAccepted]);
    assert_eq!(
        machine.insert_payment().notices,
        vec![Notice::PaymentAlreadyInserted]
    );
    assert_eq!(machine.eject_payment().notices, vec![Notice::PaymentReturned]);
    assert_eq!(machine.eject_payment().notices, vec![Notice::NoPaymentToEject]);
    assert_eq!(machine.state(), VendingState::NoPayment);
    assert_eq!(machine.inventory(), 3);
}

#[test]
fn negative_inventory_is_rejected() {
    let err = VendingMachine::with_inventory(-5).unwrap_err();

    assert_eq!(err, BuildError::NegativeInventory(-5));
    assert_eq!(err.to_string(), "Inventory must not be negative, got -5");
}

#[test]
fn history_is_bounded() {
    let mut machine = VendingMachine::builder()
        .inventory(100)
        .history_limit(4)
        .draw(ScriptedDraw::losing())
        .build()
        .unwrap();

    for _ in 0..10 {
        machine.insert_payment();
        machine.eject_payment();
    }

    assert_eq!(machine.history().transitions().len(), 4);
    assert_eq!(machine.history().last().map(|t| t.sequence), Some(20));
}

#[test]
fn history_exports_as_json() {
    let mut machine = machine(2, ScriptedDraw::losing());
    machine.insert_payment();

    let json = serde_json::to_value(machine.history()).unwrap();
    assert_eq!(json["transitions"][0]["from"], "NoPayment");
    assert_eq!(json["transitions"][0]["to"], "HasPayment");
    assert_eq!(json["transitions"][0]["trigger"], "insert_payment");
}

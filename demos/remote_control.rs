//! Remote Control
//!
//! This example binds lights to a three-slot registry and undoes the last
//! button press.
//!
//! Key concepts:
//! - Slots start bound to no-ops
//! - A macro groups actions; its undo runs in the same order
//! - Out-of-range slots are reported as errors
//!
//! Run with: cargo run --example remote_control

use std::sync::Arc;
use vendmill::command::{Action, CommandError, CommandRegistry, FnAction, Macro};

fn light(location: &'static str) -> (Arc<dyn Action>, Arc<dyn Action>) {
    let on: Arc<dyn Action> = Arc::new(FnAction::new(
        format!("{location} on"),
        move || println!("{location} light is on"),
        move || println!("{location} light is off"),
    ));
    let off: Arc<dyn Action> = Arc::new(FnAction::new(
        format!("{location} off"),
        move || println!("{location} light is off"),
        move || println!("{location} light is on"),
    ));
    (on, off)
}

fn press(remote: &mut CommandRegistry, slot: usize, on: bool) -> Result<(), CommandError> {
    println!("Clicking slot {slot} {} button...", if on { "on" } else { "off" });
    if on {
        remote.trigger_activate(slot)
    } else {
        remote.trigger_deactivate(slot)
    }
}

fn main() -> Result<(), CommandError> {
    env_logger::init();

    let (living_on, living_off) = light("Living Room");
    let (kitchen_on, kitchen_off) = light("Kitchen");

    let mut remote = CommandRegistry::new(3);
    remote.bind(0, Arc::clone(&living_on), Arc::clone(&living_off))?;
    remote.bind(1, Arc::clone(&kitchen_on), Arc::clone(&kitchen_off))?;
    remote.bind(
        2,
        Arc::new(Macro::new("all on", vec![living_on, kitchen_on])),
        Arc::new(Macro::new("all off", vec![living_off, kitchen_off])),
    )?;

    press(&mut remote, 1, true)?;
    press(&mut remote, 1, false)?;
    press(&mut remote, 0, true)?;
    press(&mut remote, 0, false)?;
    press(&mut remote, 2, true)?;
    press(&mut remote, 2, false)?;

    println!("Undoing...");
    remote.undo();

    if let Err(err) = press(&mut remote, 7, true) {
        println!("{err}");
    }

    println!("\n{remote:?}");
    Ok(())
}

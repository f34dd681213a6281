//! Vending Machine Session
//!
//! This example runs a short session against a stocked machine.
//!
//! Key concepts:
//! - Every call answers with notices instead of failing
//! - Seeded prize draws make the session reproducible
//! - State history shows the transient Dispensing/Winner states
//!
//! Run with: cargo run --example vending_machine -- [seed]

use vendmill::vending::VendingMachine;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(0);

    println!("=== Vending Machine (seed {seed}) ===\n");

    let mut machine = match VendingMachine::builder().inventory(5).seed(seed).build() {
        Ok(machine) => machine,
        Err(err) => {
            eprintln!("could not build machine: {err}");
            std::process::exit(1);
        }
    };

    println!("{machine}");
    for round in 1..=4 {
        println!("\n-- round {round} --");
        println!("{}", machine.insert_payment());
        println!("{}", machine.activate());
        println!("{machine}");
    }

    println!("\n-- misuse --");
    println!("{}", machine.eject_payment());
    println!("{}", machine.activate());

    println!("\nState path:");
    for state in machine.history().get_path() {
        println!("  {state}");
    }

    println!("\n=== Example Complete ===");
}

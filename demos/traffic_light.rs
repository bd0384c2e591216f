//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic Moore machine alongside the
//! undo/redo history and an expiring value.
//!
//! Key concepts:
//! - The state enum is its own machine (`State = Self`)
//! - Entry actions depend only on the state entered
//! - No final state (cycles indefinitely)
//!
//! Run with: cargo run --example traffic_light

use nonstandard::core::{DefaultContext, StateMachine};
use nonstandard::expiring::ExpiringValue;
use nonstandard::fsm::Moore;
use nonstandard::state_enum;
use nonstandard::UndoRedo;
use std::time::Duration;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

impl StateMachine for TrafficLight {
    type State = Self;
    type Input = ();
    type Output = (Self, &'static str);
    type InitialContext = ();

    fn initial_state(_: &()) -> Self {
        Self::Red
    }

    fn is_final(_: &Self) -> bool {
        false
    }

    fn transition(state: &Self, _: ()) -> (Self, &'static str) {
        match state {
            Self::Red => (Self::Green, "Go!"),
            Self::Green => (Self::Yellow, "Caution"),
            Self::Yellow => (Self::Red, "Stop"),
        }
    }

    fn from_state(state: Self) -> Self {
        state
    }

    fn current_state(&self) -> &Self {
        self
    }

    fn set_current_state(&mut self, state: Self) {
        *self = state;
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = TrafficLight::start();
    let mut log = UndoRedo::new(light);
    println!("Initial state: {:?}", light);
    println!("All states: {:?}\n", TrafficLight::all_states());

    println!("Transition sequence:");
    for _ in 0..6 {
        let from = light;
        let action = light.step();
        log.set(light);
        println!("  {:?} -> {:?} ({})", from, light, action);
    }

    log.undo();
    log.undo();
    println!("\nTwo steps back in the log: {:?}", log.value());
    println!("Redo stack: {:?}", log.redo_stack());

    let mut last_seen = ExpiringValue::new(Duration::from_secs(30));
    last_seen.set(light);
    println!("\nLast seen (fresh for 30s): {:?}", last_seen.get());

    println!("\n=== Example Complete ===");
}

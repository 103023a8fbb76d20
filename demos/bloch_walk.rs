//! Walks one qubit around the Bloch sphere and prints where each gate leaves it.
//!
//! Run with `RUST_LOG=qglass=debug` to see the engine's own log lines.

use qglass::{Circuit, QglassError};
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QglassError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Start tilted a little off the pole so the walk is not all axis points
    let mut circuit = Circuit::create(1, (PI / 8.0, 0.0, 0.0))?;
    println!("Start: {}", circuit.bloch_vector(0)?);

    let steps: [(&str, &[f64]); 6] = [
        ("h", &[]),
        ("s", &[]),
        ("rx", &[PI / 2.0]),
        ("t", &[]),
        ("ry", &[-PI / 3.0]),
        ("z", &[]),
    ];

    for (name, params) in steps {
        circuit.apply(name, params, &[0])?;
        let v = circuit.bloch_vector(0)?;
        let (theta, phi) = v.angles();
        println!(
            "  after {:<3} -> {}  (theta = {:.3}, phi = {:.3}, |r| = {:.6})",
            name,
            v,
            theta,
            phi,
            v.norm()
        );
    }

    println!("\nGate log:");
    for entry in circuit.log() {
        println!("  {}", entry);
    }
    println!("\n{}", circuit);

    // Replaying the log lands on the same point
    let replayed = circuit.replay()?;
    println!("Replay matches current state: {}", replayed.approx_eq(circuit.state(), 1e-9));

    circuit.reset();
    println!("After reset: {} ({} gates in log)", circuit.bloch_vector(0)?, circuit.len());
    Ok(())
}

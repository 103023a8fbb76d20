//! Prepares a Bell pair, prints its distribution and a sampled histogram.

use qglass::{Circuit, QglassError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

const SHOTS: usize = 1024;

fn main() -> Result<(), QglassError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut circuit = Circuit::new(2)?;
    circuit.apply("h", &[], &[0])?;
    circuit.apply("cx", &[], &[0, 1])?; // control q0, target q1
    println!("{}", circuit);
    println!("Final state: {}", circuit.state());

    println!("\nExact probabilities:");
    for (bits, p) in circuit.probabilities().iter() {
        println!("  |{}>  {:.4}", bits, p);
    }

    // Fixed seed so repeated runs print the same counts
    let mut rng = StdRng::seed_from_u64(2024);
    let histogram = circuit.sample(SHOTS, &mut rng);
    println!("\nSampled {} shots:", histogram.shots());
    print!("{}", histogram);

    println!("\nPer-qubit Bloch vectors (entangled qubits sit at the centre):");
    for (q, v) in circuit.bloch_vectors().iter().enumerate() {
        println!("  q{}: {}  |r| = {:.6}", q, v, v.norm());
    }

    // Undo the entangler and the pair separates again
    circuit.apply("cx", &[], &[0, 1])?;
    circuit.apply("h", &[], &[0])?;
    println!("\nAfter uncomputing: one shot reads {}", circuit.measure(&mut rng));
    Ok(())
}

// tests/simulation_tests.rs

use qglass::{Circuit, Gate, QglassError, StateVector};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

const EPS: f64 = 1e-9;

// Helper: a register rotated away from |0> so gate identities are not trivially true
fn tilted(num_qubits: usize) -> Result<Circuit, QglassError> {
    Circuit::create(num_qubits, (1.1, 0.4, -0.7))
}

fn assert_state_eq(actual: &StateVector, expected: &StateVector, context: &str) {
    assert!(
        actual.approx_eq(expected, EPS),
        "state mismatch ({})\n  actual:   {}\n  expected: {}",
        context,
        actual,
        expected
    );
}

fn amplitude(circuit: &Circuit, index: usize) -> Complex64 {
    circuit.state().amplitude(index).expect("index in range")
}

#[test]
fn test_new_circuit_starts_in_zero_state() -> Result<(), QglassError> {
    let circuit = Circuit::new(3)?;
    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.state().dim(), 8);
    assert_eq!(amplitude(&circuit, 0), Complex64::new(1.0, 0.0));
    assert!(circuit.log().is_empty());
    Ok(())
}

#[test]
fn test_zero_qubits_rejected() {
    assert!(matches!(Circuit::new(0), Err(QglassError::InvalidQubitCount { requested: 0, .. })));
}

#[test]
fn test_initial_angles_rotate_qubit_zero() -> Result<(), QglassError> {
    // U3(pi/2, 0, 0) is Ry(pi/2): |0> -> |+>
    let circuit = Circuit::create(2, (PI / 2.0, 0.0, 0.0))?;
    assert!((amplitude(&circuit, 0).re - FRAC_1_SQRT_2).abs() < EPS);
    assert!((amplitude(&circuit, 1).re - FRAC_1_SQRT_2).abs() < EPS);
    assert!(amplitude(&circuit, 2).norm() < EPS);

    let v = circuit.bloch_vector(0)?;
    assert!((v.x - 1.0).abs() < EPS);
    assert!(circuit.log().is_empty(), "initialisation is not logged");
    Ok(())
}

#[test]
fn test_non_finite_initial_angle_rejected() {
    assert!(matches!(
        Circuit::create(1, (f64::NAN, 0.0, 0.0)),
        Err(QglassError::InvalidParameter { .. })
    ));
}

#[test]
fn test_self_inverse_gates() -> Result<(), QglassError> {
    for name in ["x", "y", "z", "h"] {
        let mut circuit = tilted(1)?;
        let before = circuit.snapshot();
        circuit.apply(name, &[], &[0])?;
        circuit.apply(name, &[], &[0])?;
        assert_state_eq(circuit.state(), &before, name);
    }
    Ok(())
}

#[test]
fn test_phase_gate_identities() -> Result<(), QglassError> {
    // S.S = Z
    let mut ss = tilted(1)?;
    ss.apply("s", &[], &[0])?;
    ss.apply("s", &[], &[0])?;
    let mut z = tilted(1)?;
    z.apply("z", &[], &[0])?;
    assert_state_eq(ss.state(), z.state(), "S.S = Z");

    // T.T = S
    let mut tt = tilted(1)?;
    tt.apply("t", &[], &[0])?;
    tt.apply("t", &[], &[0])?;
    let mut s = tilted(1)?;
    s.apply("s", &[], &[0])?;
    assert_state_eq(tt.state(), s.state(), "T.T = S");

    // S then S-dagger is the identity
    let mut sd = tilted(1)?;
    let before = sd.snapshot();
    sd.apply("s", &[], &[0])?;
    sd.apply("sdg", &[], &[0])?;
    assert_state_eq(sd.state(), &before, "S.Sdg = I");
    Ok(())
}

#[test]
fn test_rz_inverse() -> Result<(), QglassError> {
    for theta in [0.0, 0.3, -1.2, PI, 2.0 * PI, 17.5] {
        let mut circuit = tilted(1)?;
        let before = circuit.snapshot();
        circuit.apply("rz", &[theta], &[0])?;
        circuit.apply("rz", &[-theta], &[0])?;
        assert_state_eq(circuit.state(), &before, &format!("rz({})", theta));
    }
    Ok(())
}

#[test]
fn test_cx_flips_target_when_control_set() -> Result<(), QglassError> {
    // |10>: qubit 1 set, qubit 0 clear
    let mut circuit = Circuit::new(2)?;
    circuit.apply("x", &[], &[1])?;
    assert!((amplitude(&circuit, 0b10).re - 1.0).abs() < EPS);

    circuit.apply("cx", &[], &[1, 0])?;
    assert!((amplitude(&circuit, 0b11).re - 1.0).abs() < EPS, "expected |11>, got {}", circuit.state());
    Ok(())
}

#[test]
fn test_cx_leaves_zero_state_alone() -> Result<(), QglassError> {
    let mut circuit = Circuit::new(2)?;
    let before = circuit.snapshot();
    circuit.apply("cx", &[], &[1, 0])?;
    assert_state_eq(circuit.state(), &before, "cx on |00>");
    Ok(())
}

#[test]
fn test_cx_on_non_adjacent_qubits() -> Result<(), QglassError> {
    // |001> -> cx(0, 2) -> |101>
    let mut circuit = Circuit::new(3)?;
    circuit.apply("x", &[], &[0])?;
    circuit.apply("cx", &[], &[0, 2])?;
    assert!((amplitude(&circuit, 0b101).re - 1.0).abs() < EPS, "got {}", circuit.state());

    // control is now qubit 2 (set), target qubit 0 flips back: |100>
    circuit.apply("cx", &[], &[2, 0])?;
    assert!((amplitude(&circuit, 0b100).re - 1.0).abs() < EPS, "got {}", circuit.state());
    Ok(())
}

#[test]
fn test_unknown_gate_leaves_circuit_untouched() -> Result<(), QglassError> {
    let mut circuit = tilted(2)?;
    circuit.apply("h", &[], &[1])?;
    let before = circuit.clone();

    let result = circuit.apply("toffoli", &[], &[0]);
    assert_eq!(result, Err(QglassError::UnknownGate { name: "toffoli".to_string() }));
    assert_eq!(circuit.state(), before.state());
    assert_eq!(circuit.log(), before.log());
    Ok(())
}

#[test]
fn test_failed_apply_is_atomic_for_every_error_kind() -> Result<(), QglassError> {
    let mut circuit = tilted(2)?;
    circuit.apply("ry", &[0.8], &[1])?;
    let before = circuit.clone();

    let failures = [
        circuit.apply("rx", &[f64::NAN], &[0]),
        circuit.apply("rx", &[], &[0]),
        circuit.apply("x", &[], &[2]),
        circuit.apply("cx", &[], &[0]),
        circuit.apply("cx", &[], &[1, 1]),
        circuit.apply_gate(Gate::Rz(f64::INFINITY), &[0]),
    ];
    assert!(matches!(failures[0], Err(QglassError::InvalidParameter { .. })));
    assert!(matches!(failures[1], Err(QglassError::InvalidParameter { .. })));
    assert!(matches!(failures[2], Err(QglassError::InvalidTarget { qubit: 2, .. })));
    assert!(matches!(failures[3], Err(QglassError::DimensionMismatch { expected: 2, actual: 1, .. })));
    assert!(matches!(failures[4], Err(QglassError::InvalidTarget { qubit: 1, .. })));
    assert!(matches!(failures[5], Err(QglassError::InvalidParameter { .. })));

    assert_eq!(circuit, before);
    Ok(())
}

#[test]
fn test_reset_restores_initial_state_and_clears_log() -> Result<(), QglassError> {
    let mut circuit = tilted(2)?;
    let initial = circuit.snapshot();
    circuit.apply("h", &[], &[0])?;
    circuit.apply("cx", &[], &[0, 1])?;
    circuit.apply("rz", &[0.5], &[1])?;
    assert_eq!(circuit.len(), 3);

    circuit.reset();
    assert!(circuit.is_empty());
    assert_state_eq(circuit.state(), &initial, "after reset");
    assert_eq!(circuit.initial_angles(), (1.1, 0.4, -0.7));
    Ok(())
}

#[test]
fn test_log_records_call_order() -> Result<(), QglassError> {
    let mut circuit = Circuit::new(2)?;
    circuit.apply("H", &[], &[0])?;
    circuit.apply("ry", &[0.25], &[1])?;
    circuit.apply("cnot", &[], &[0, 1])?;

    let log = circuit.log();
    assert_eq!(log.len(), 3);
    assert_eq!((log[0].sequence(), log[0].name()), (0, "h"));
    assert_eq!((log[1].name(), log[1].params()), ("ry", vec![0.25]));
    assert_eq!((log[2].name(), log[2].targets()), ("cx", &[0usize, 1][..]));
    Ok(())
}

#[test]
fn test_gate_order_matters() -> Result<(), QglassError> {
    let mut hs = Circuit::new(1)?;
    hs.apply("h", &[], &[0])?;
    hs.apply("s", &[], &[0])?;
    let mut sh = Circuit::new(1)?;
    sh.apply("s", &[], &[0])?;
    sh.apply("h", &[], &[0])?;
    assert!(!hs.state().approx_eq(sh.state(), EPS));
    Ok(())
}

#[test]
fn test_replay_matches_incremental_state() -> Result<(), QglassError> {
    let mut circuit = tilted(3)?;
    for (name, params, targets) in [
        ("h", vec![], vec![0]),
        ("cx", vec![], vec![0, 2]),
        ("rx", vec![0.7], vec![1]),
        ("t", vec![], vec![2]),
        ("cx", vec![], vec![1, 0]),
        ("ry", vec![-2.4], vec![0]),
    ] {
        circuit.apply(name, &params, &targets)?;
    }

    let replayed = circuit.replay()?;
    assert_state_eq(&replayed, circuit.state(), "replay");

    let rebuilt = Circuit::from_log(3, (1.1, 0.4, -0.7), *circuit.config(), circuit.log())?;
    assert_state_eq(rebuilt.state(), circuit.state(), "from_log");
    assert_eq!(rebuilt.log(), circuit.log());
    Ok(())
}

#[test]
fn test_snapshot_is_detached_from_later_gates() -> Result<(), QglassError> {
    let mut circuit = Circuit::new(1)?;
    let snapshot = circuit.snapshot();
    circuit.apply("x", &[], &[0])?;
    assert_eq!(snapshot.amplitude(0), Some(Complex64::new(1.0, 0.0)));
    assert!(circuit.state().amplitude(0).unwrap().norm() < EPS);
    Ok(())
}

#[test]
fn test_state_stays_normalized_over_long_sequences() -> Result<(), QglassError> {
    let mut circuit = Circuit::new(3)?;
    for step in 0..500 {
        let q = step % 3;
        circuit.apply("rx", &[0.1 * step as f64], &[q])?;
        circuit.apply("t", &[], &[(q + 1) % 3])?;
        circuit.apply("cx", &[], &[q, (q + 2) % 3])?;
    }
    assert!(qglass::check_normalization(circuit.state(), None));
    assert_eq!(circuit.len(), 1500);
    Ok(())
}

// src/gates/mod.rs

//! Fixed operator matrices used by the protocol.
//!
//! The quantized dilemma needs exactly four operators: the three
//! single-qubit strategy unitaries and the two-qubit entangler J(γ)
//! (with its adjoint). They are written out in closed form rather than
//! assembled from a general gate set, since the circuit shape never
//! varies.

use crate::core::Strategy;
use num_complex::Complex;
use num_traits::Zero;

/// 2x2 operator acting on a single player's qubit.
pub(crate) type SingleGate = [[Complex<f64>; 2]; 2];

/// 4x4 operator acting on the joint two-qubit register.
pub(crate) type PairGate = [[Complex<f64>; 4]; 4];

/// The unitary a strategy applies to its player's qubit.
///
/// Cooperate is the identity, Defect is i·X (a bit flip up to global
/// phase) and Quantum is i·Z (a phase flip up to global phase). The i
/// factors cancel in readout probabilities but are kept to match the
/// published protocol's operator choices.
pub(crate) fn strategy_matrix(strategy: Strategy) -> SingleGate {
    let i = Complex::i();
    match strategy {
        Strategy::Cooperate => [
            [Complex::new(1.0, 0.0), Complex::zero()],
            [Complex::zero(), Complex::new(1.0, 0.0)],
        ],
        Strategy::Defect => [
            [Complex::zero(), i],
            [i, Complex::zero()],
        ],
        Strategy::Quantum => [
            [i, Complex::zero()],
            [Complex::zero(), -i],
        ],
    }
}

/// Entangling operator J(γ) = exp(iγ·X⊗X/2).
///
/// X⊗X squares to the identity, so the exponential reduces to
/// cos(γ/2)·I + i·sin(γ/2)·(X⊗X). X⊗X flips both qubits, pairing
/// |00⟩↔|11⟩ and |01⟩↔|10⟩: the closed form has cos(γ/2) on the
/// diagonal and i·sin(γ/2) on the anti-diagonal.
pub(crate) fn entangler(gamma: f64) -> PairGate {
    coupling_gate(gamma, 1.0)
}

/// Disentangling operator J(γ)†, the adjoint of [`entangler`].
pub(crate) fn disentangler(gamma: f64) -> PairGate {
    coupling_gate(gamma, -1.0)
}

fn coupling_gate(gamma: f64, sign: f64) -> PairGate {
    let c = Complex::new((gamma / 2.0).cos(), 0.0);
    let s = Complex::new(0.0, sign * (gamma / 2.0).sin());
    let z = Complex::zero();
    [
        [c, z, z, s],
        [z, c, s, z],
        [z, s, c, z],
        [s, z, z, c],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::game_constants::MAX_GAMMA;

    const TEST_TOLERANCE: f64 = 1e-12;

    /// Checks M† · M = I for a 2x2 operator.
    fn assert_single_unitary(m: &SingleGate, context: &str) {
        for row in 0..2 {
            for col in 0..2 {
                let mut entry: Complex<f64> = Complex::zero();
                for k in 0..2 {
                    entry += m[k][row].conj() * m[k][col];
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!(
                    (entry - Complex::new(expected, 0.0)).norm_sqr() < TEST_TOLERANCE,
                    "M†M[{}][{}] = {} for {}",
                    row, col, entry, context
                );
            }
        }
    }

    #[test]
    fn strategy_matrices_are_unitary() {
        for strategy in Strategy::ALL {
            assert_single_unitary(&strategy_matrix(strategy), strategy.label());
        }
    }

    #[test]
    fn disentangler_inverts_entangler() {
        for gamma in [0.0, 0.3, 1.0, MAX_GAMMA] {
            let j = entangler(gamma);
            let j_dag = disentangler(gamma);
            for row in 0..4 {
                for col in 0..4 {
                    let mut entry: Complex<f64> = Complex::zero();
                    for k in 0..4 {
                        entry += j_dag[row][k] * j[k][col];
                    }
                    let expected = if row == col { 1.0 } else { 0.0 };
                    assert!(
                        (entry - Complex::new(expected, 0.0)).norm_sqr() < TEST_TOLERANCE,
                        "J†J[{}][{}] = {} at gamma = {}",
                        row, col, entry, gamma
                    );
                }
            }
        }
    }

    #[test]
    fn entangler_at_zero_is_identity() {
        let j = entangler(0.0);
        for (row, j_row) in j.iter().enumerate() {
            for (col, entry) in j_row.iter().enumerate() {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((entry - Complex::new(expected, 0.0)).norm_sqr() < TEST_TOLERANCE);
            }
        }
    }
}

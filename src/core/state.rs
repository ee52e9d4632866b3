// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// Dimension of the joint two-qubit state space.
pub(crate) const DIM: usize = 4;

/// Joint state of the two players' qubits prior to readout.
///
/// Basis ordering is |ab⟩ with Alice's bit `a` as the high bit, so the
/// four amplitudes occupy indices |00⟩=0, |01⟩=1, |10⟩=2, |11⟩=3,
/// matching [`Outcome`](super::payoff::Outcome) order. `Complex<f64>`
/// amplitudes carry the relative phases the entangling operator
/// introduces; squared magnitudes are the readout probabilities.
///
/// The register is fixed at two qubits: the protocol has exactly one
/// qubit per player, so unlike a general simulator there is no 2^N
/// scaling to manage.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    amplitudes: [Complex<f64>; DIM],
}

impl GameState {
    /// Both players start from the cooperate basis state: joint |00⟩.
    pub(crate) fn initial() -> Self {
        let mut amplitudes = [Complex::zero(); DIM];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex<f64>; DIM] {
        &self.amplitudes
    }

    /// Squared-magnitude distribution over the four classical outcomes.
    pub fn probabilities(&self) -> [f64; DIM] {
        self.amplitudes.map(|c| c.norm_sqr())
    }

    /// Sum of squared amplitude magnitudes (1.0 for a well-formed state).
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Applies a 2x2 operator to one player's qubit, leaving the other
    /// untouched. Standard tensor product structure: iterate over pairs of
    /// basis states differing only at the target qubit's bit position.
    pub(crate) fn apply_single(&mut self, qubit_index: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let k = 1 - qubit_index; // bit position (from right, 0-based)
        let k_mask = 1usize << k;

        let mut new_amps = [Complex::zero(); DIM];
        for i0 in 0..DIM {
            if i0 & k_mask != 0 {
                continue; // handled as the partner of its |...0...> pair
            }
            let i1 = i0 | k_mask;

            let psi_0 = self.amplitudes[i0]; // amplitude for target bit 0
            let psi_1 = self.amplitudes[i1]; // amplitude for target bit 1

            // Apply the 2x2 matrix: [psi_0', psi_1'] = matrix * [psi_0, psi_1]
            new_amps[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_amps[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
        self.amplitudes = new_amps;
    }

    /// Applies a 4x4 operator to the whole register.
    pub(crate) fn apply_pair(&mut self, matrix: &[[Complex<f64>; DIM]; DIM]) {
        let mut new_amps = [Complex::zero(); DIM];
        for (row, new_amp) in new_amps.iter_mut().enumerate() {
            for (col, amp) in self.amplitudes.iter().enumerate() {
                *new_amp += matrix[row][col] * *amp;
            }
        }
        self.amplitudes = new_amps;
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

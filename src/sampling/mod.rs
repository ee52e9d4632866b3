// src/sampling/mod.rs

//! Finite-shot sampling over the exact outcome distribution.
//!
//! The payoff engine itself is closed-form and noise-free; sampling
//! exists for callers that want measurement-style histograms, the shot
//! counts a hardware or simulator backend would report. Draws are seeded,
//! so identical requests reproduce identical histograms and empirical
//! payoffs converge on the exact ones as the shot count grows.

use crate::core::{Outcome, PayoffMatrix, QpdError, Strategy};
use crate::game::EwlGame;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::fmt;

/// Histogram of sampled classical outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeCounts {
    counts: [u64; 4],
    shots: u64,
}

impl OutcomeCounts {
    /// Total number of sampled shots.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Number of shots that resolved to the given outcome.
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.basis_index()]
    }

    /// Empirical frequency of the given outcome.
    pub fn frequency(&self, outcome: Outcome) -> f64 {
        self.counts[outcome.basis_index()] as f64 / self.shots as f64
    }

    /// Empirical expected payoff pair under the given payoff table.
    pub fn expected_payoffs(&self, payoffs: &PayoffMatrix) -> (f64, f64) {
        let mut expected = (0.0, 0.0);
        for outcome in Outcome::ALL {
            let frequency = self.frequency(outcome);
            let (pay_a, pay_b) = payoffs.pair(outcome);
            expected.0 += frequency * pay_a;
            expected.1 += frequency * pay_b;
        }
        expected
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outcome counts over {} shots:", self.shots)?;
        for outcome in Outcome::ALL {
            writeln!(f, "  {}: {}", outcome, self.count(outcome))?;
        }
        Ok(())
    }
}

/// Samples `shots` classical outcomes for one parameter triple.
///
/// The exact distribution is computed first (one closed-form query), then
/// each shot is drawn from it by inverse transform with a `seed`-derived
/// PRNG. The same (γ, strategies, shots, seed) input always reproduces
/// the same histogram.
///
/// # Arguments
/// * `game` - The payoff engine to query.
/// * `gamma` - Entanglement parameter in [0, π/2].
/// * `alice` - Alice's strategy.
/// * `bob` - Bob's strategy.
/// * `shots` - Number of draws; must be positive.
/// * `seed` - PRNG seed fixing the draw sequence.
pub fn sample_outcomes(
    game: &EwlGame,
    gamma: f64,
    alice: Strategy,
    bob: Strategy,
    shots: u64,
    seed: u64,
) -> Result<OutcomeCounts, QpdError> {
    if shots == 0 {
        return Err(QpdError::InvalidParameter {
            message: "shot count must be positive".to_string(),
        });
    }

    let result = game.play(gamma, alice, bob)?;
    let distribution = result.distribution();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = [0u64; 4];
    for _ in 0..shots {
        let p_sample: f64 = rng.random::<f64>();
        let mut cumulative = 0.0;
        // The last outcome absorbs any floating-point residue so every
        // draw lands on a valid basis index.
        let mut chosen = distribution.len() - 1;
        for (index, p) in distribution.iter().enumerate() {
            cumulative += p;
            if p_sample < cumulative {
                chosen = index;
                break;
            }
        }
        counts[chosen] += 1;
    }

    Ok(OutcomeCounts { counts, shots })
}

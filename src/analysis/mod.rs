// src/analysis/mod.rs

//! Parameter sweeps and equilibrium analysis over the payoff engine.
//!
//! Covers the two standard experiments for the quantized dilemma: the
//! entanglement sweep (expected payoff as a function of γ for a fixed
//! strategy pair) and the full payoff table at a fixed γ, with best
//! responses and pure-strategy Nash equilibria derived from it. Every
//! entry is an independent engine query, so results are keyed by their
//! own inputs and callers may recompute or cache freely.

use crate::core::constants::game_constants::{MAX_GAMMA, PAYOFF_TOLERANCE};
use crate::core::{QpdError, Strategy};
use crate::game::EwlGame;
use std::fmt;

/// One sample of an entanglement sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Entanglement parameter this sample was computed at.
    pub gamma: f64,
    /// Alice's expected payoff.
    pub payoff_a: f64,
    /// Bob's expected payoff.
    pub payoff_b: f64,
}

/// Sweeps γ across [0, π/2] with `samples` evenly spaced points, both
/// endpoints included.
///
/// The first point is exactly γ=0 and the last exactly γ=π/2, so the
/// classical and maximally entangled regimes always appear in a rendered
/// curve regardless of sample count.
///
/// # Arguments
/// * `game` - The payoff engine to query.
/// * `alice` - Alice's strategy, held fixed across the sweep.
/// * `bob` - Bob's strategy, held fixed across the sweep.
/// * `samples` - Number of points; must be at least 2.
pub fn sweep(
    game: &EwlGame,
    alice: Strategy,
    bob: Strategy,
    samples: usize,
) -> Result<Vec<SweepPoint>, QpdError> {
    if samples < 2 {
        return Err(QpdError::InvalidParameter {
            message: format!("sweep needs at least 2 samples, got {}", samples),
        });
    }

    let step = MAX_GAMMA / (samples - 1) as f64;
    let mut points = Vec::with_capacity(samples);
    for n in 0..samples {
        // Pin the last sample to the exact domain edge so accumulated
        // floating-point error cannot push it past the validated range.
        let gamma = if n + 1 == samples { MAX_GAMMA } else { step * n as f64 };
        let (payoff_a, payoff_b) = game.expected_payoffs(gamma, alice, bob)?;
        points.push(SweepPoint { gamma, payoff_a, payoff_b });
    }
    Ok(points)
}

/// Expected payoff pairs for every strategy pairing at a fixed γ.
///
/// Rows are Alice's strategy, columns Bob's, in (C, D, Q) order.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffTable {
    gamma: f64,
    entries: [[(f64, f64); 3]; 3],
}

impl PayoffTable {
    /// The entanglement parameter the table was computed at.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Payoff pair (Alice, Bob) when Alice plays `row` and Bob plays `column`.
    pub fn pair(&self, row: Strategy, column: Strategy) -> (f64, f64) {
        self.entries[row.index()][column.index()]
    }
}

impl fmt::Display for PayoffTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Payoff table at gamma = {:.4} (Alice, Bob):", self.gamma)?;
        write!(f, "  {:<12}|", "Alice \\ Bob")?;
        for column in Strategy::ALL {
            write!(f, "{:^14}|", column.label())?;
        }
        writeln!(f)?;
        for row in Strategy::ALL {
            write!(f, "  {:<12}|", row.label())?;
            for column in Strategy::ALL {
                let (pay_a, pay_b) = self.pair(row, column);
                write!(f, "{:^14}|", format!("({:.1}, {:.1})", pay_a, pay_b))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds the full 3x3 payoff table at a fixed γ.
pub fn payoff_table(game: &EwlGame, gamma: f64) -> Result<PayoffTable, QpdError> {
    let mut entries = [[(0.0, 0.0); 3]; 3];
    for row in Strategy::ALL {
        for column in Strategy::ALL {
            entries[row.index()][column.index()] = game.expected_payoffs(gamma, row, column)?;
        }
    }
    Ok(PayoffTable { gamma, entries })
}

/// Strategies maximising the row player's payoff against a fixed
/// column-player strategy.
///
/// Ties within tolerance are all reported, in (C, D, Q) order. By the
/// protocol's swap symmetry the same answer holds for the column player
/// against a fixed row strategy.
pub fn best_responses(
    game: &EwlGame,
    gamma: f64,
    opponent: Strategy,
) -> Result<Vec<Strategy>, QpdError> {
    let mut payoffs = [0.0; 3];
    let mut best = f64::NEG_INFINITY;
    for candidate in Strategy::ALL {
        let (pay_row, _) = game.expected_payoffs(gamma, candidate, opponent)?;
        payoffs[candidate.index()] = pay_row;
        if pay_row > best {
            best = pay_row;
        }
    }
    Ok(Strategy::ALL
        .into_iter()
        .filter(|candidate| payoffs[candidate.index()] > best - PAYOFF_TOLERANCE)
        .collect())
}

/// All pure-strategy profiles from which neither player gains by a
/// unilateral deviation (within tolerance).
///
/// Under the standard payoff table this is {(D, D)} in the classical
/// limit and {(Q, Q)} at maximal entanglement, the equilibrium shift
/// that motivates the quantized game.
pub fn pure_equilibria(
    game: &EwlGame,
    gamma: f64,
) -> Result<Vec<(Strategy, Strategy)>, QpdError> {
    let table = payoff_table(game, gamma)?;
    let mut found = Vec::new();
    for alice in Strategy::ALL {
        for bob in Strategy::ALL {
            let (pay_a, pay_b) = table.pair(alice, bob);
            let alice_stable = Strategy::ALL
                .iter()
                .all(|alt| table.pair(*alt, bob).0 <= pay_a + PAYOFF_TOLERANCE);
            let bob_stable = Strategy::ALL
                .iter()
                .all(|alt| table.pair(alice, *alt).1 <= pay_b + PAYOFF_TOLERANCE);
            if alice_stable && bob_stable {
                found.push((alice, bob));
            }
        }
    }
    Ok(found)
}

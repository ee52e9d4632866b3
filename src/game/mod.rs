// src/game/mod.rs

//! Evaluates the quantized dilemma for chosen parameters.
//! This module contains the `EwlGame` entry point and the internal
//! `EwlEngine` responsible for evolving the joint state through the
//! fixed entangle/strategize/disentangle sequence.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::GameResult;

use crate::core::{Outcome, PayoffMatrix, QpdError, Strategy};
use crate::validation;
use engine::EwlEngine;

/// The payoff engine: maps (γ, strategy, strategy) triples to expected
/// payoffs for both players.
///
/// Stateless between queries: each call evolves a fresh |00⟩ register, so
/// repeated queries with identical inputs return identical results and a
/// shared `EwlGame` may be queried from any number of threads without
/// coordination. The only configuration is the payoff table, fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct EwlGame {
    payoffs: PayoffMatrix,
}

impl EwlGame {
    /// An engine over the standard payoff constants (T, R, P, S) = (5, 3, 1, 0).
    pub fn new() -> Self {
        Self { payoffs: PayoffMatrix::standard() }
    }

    /// An engine over a caller-supplied payoff table.
    pub fn with_payoffs(payoffs: PayoffMatrix) -> Self {
        Self { payoffs }
    }

    /// The payoff table this engine contracts against.
    pub fn payoff_matrix(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    /// Runs one full query: evolves the protocol circuit for the given
    /// parameters and contracts the outcome distribution against the
    /// payoff table.
    ///
    /// # Arguments
    /// * `gamma` - Entanglement parameter in [0, π/2].
    /// * `alice` - Alice's strategy.
    /// * `bob` - Bob's strategy.
    ///
    /// # Returns
    /// * `Ok(GameResult)` with the outcome distribution and payoff pair.
    /// * `Err(QpdError)` if `gamma` is out of range or the evolved state
    ///   fails its normalization check.
    pub fn play(&self, gamma: f64, alice: Strategy, bob: Strategy) -> Result<GameResult, QpdError> {
        let mut engine = EwlEngine::init();
        engine.run(gamma, alice, bob)?;

        let distribution = engine.state().probabilities();
        validation::check_distribution(&distribution, None)?;

        let mut expected = (0.0, 0.0);
        for outcome in Outcome::ALL {
            let p = distribution[outcome.basis_index()];
            let (pay_a, pay_b) = self.payoffs.pair(outcome);
            expected.0 += p * pay_a;
            expected.1 += p * pay_b;
        }

        Ok(GameResult::new(gamma, alice, bob, distribution, expected))
    }

    /// Expected payoff pair only, for callers that render payoff curves
    /// and do not need the distribution.
    pub fn expected_payoffs(
        &self,
        gamma: f64,
        alice: Strategy,
        bob: Strategy,
    ) -> Result<(f64, f64), QpdError> {
        Ok(self.play(gamma, alice, bob)?.payoffs())
    }
}

impl Default for EwlGame {
    fn default() -> Self {
        Self::new()
    }
}

// src/game/results.rs

use crate::core::{Outcome, Player, Strategy};
use std::fmt;

/// Holds the result of a single payoff query.
///
/// Carries the query parameters alongside the exact outcome distribution
/// and the expected payoff pair derived from it, so a caller can render
/// probabilities and payoffs without re-deriving either.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    gamma: f64,
    alice: Strategy,
    bob: Strategy,
    distribution: [f64; 4],
    payoffs: (f64, f64),
}

impl GameResult {
    /// Records a completed query. (Internal visibility)
    pub(crate) fn new(
        gamma: f64,
        alice: Strategy,
        bob: Strategy,
        distribution: [f64; 4],
        payoffs: (f64, f64),
    ) -> Self {
        Self { gamma, alice, bob, distribution, payoffs }
    }

    /// The entanglement parameter this result was computed for.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The queried strategy pair, (Alice, Bob).
    pub fn strategies(&self) -> (Strategy, Strategy) {
        (self.alice, self.bob)
    }

    /// Probability of a specific classical outcome.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        self.distribution[outcome.basis_index()]
    }

    /// The exact distribution over (CC, CD, DC, DD).
    pub fn distribution(&self) -> [f64; 4] {
        self.distribution
    }

    /// Expected payoff pair, (Alice, Bob).
    pub fn payoffs(&self) -> (f64, f64) {
        self.payoffs
    }

    /// Expected payoff for one player.
    pub fn payoff(&self, player: Player) -> f64 {
        match player {
            Player::Alice => self.payoffs.0,
            Player::Bob => self.payoffs.1,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game Result ({} vs {}, gamma = {:.4}):",
            self.alice, self.bob, self.gamma
        )?;
        writeln!(f, "  Outcome probabilities:")?;
        for outcome in Outcome::ALL {
            writeln!(f, "    P({}) = {:.6}", outcome, self.probability(outcome))?;
        }
        writeln!(
            f,
            "  Expected payoffs: Alice = {:.4}, Bob = {:.4}",
            self.payoffs.0, self.payoffs.1
        )
    }
}

// src/core/payoff.rs

use super::constants::game_constants;
use super::error::QpdError;
use std::fmt;

/// One of the four classical readout outcomes.
///
/// The first letter is Alice's measured move, the second Bob's, so `CD`
/// means Alice cooperated and Bob defected. Variants are ordered to match
/// the joint state's basis indices (Alice's bit is the high bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Both cooperate.
    CC,
    /// Alice cooperates, Bob defects.
    CD,
    /// Alice defects, Bob cooperates.
    DC,
    /// Both defect.
    DD,
}

impl Outcome {
    /// All outcomes, in basis order.
    pub const ALL: [Outcome; 4] = [Outcome::CC, Outcome::CD, Outcome::DC, Outcome::DD];

    /// Basis index of this outcome in the joint state vector.
    pub fn basis_index(&self) -> usize {
        match self {
            Outcome::CC => 0,
            Outcome::CD => 1,
            Outcome::DC => 2,
            Outcome::DD => 3,
        }
    }

    /// Whether Alice's measured bit is the defection quality.
    pub fn alice_defects(&self) -> bool {
        matches!(self, Outcome::DC | Outcome::DD)
    }

    /// Whether Bob's measured bit is the defection quality.
    pub fn bob_defects(&self) -> bool {
        matches!(self, Outcome::CD | Outcome::DD)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CC => write!(f, "CC"),
            Outcome::CD => write!(f, "CD"),
            Outcome::DC => write!(f, "DC"),
            Outcome::DD => write!(f, "DD"),
        }
    }
}

/// The classical Prisoner's Dilemma payoff table.
///
/// Immutable after construction; the engine only reads it. Construction
/// enforces the dilemma ordering T > R > P > S, which is what makes mutual
/// defection the classical equilibrium despite mutual cooperation paying
/// both players more.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffMatrix {
    reward: f64,
    sucker: f64,
    temptation: f64,
    punishment: f64,
}

impl PayoffMatrix {
    /// The standard constants (T, R, P, S) = (5, 3, 1, 0).
    pub fn standard() -> Self {
        Self {
            reward: game_constants::REWARD,
            sucker: game_constants::SUCKER,
            temptation: game_constants::TEMPTATION,
            punishment: game_constants::PUNISHMENT,
        }
    }

    /// Builds a custom table, rejecting values that break the dilemma
    /// ordering T > R > P > S.
    pub fn new(reward: f64, sucker: f64, temptation: f64, punishment: f64) -> Result<Self, QpdError> {
        let ordered = temptation > reward && reward > punishment && punishment > sucker;
        let finite = reward.is_finite() && sucker.is_finite()
            && temptation.is_finite() && punishment.is_finite();
        if !finite || !ordered {
            return Err(QpdError::InvalidParameter {
                message: format!(
                    "payoff values (T={}, R={}, P={}, S={}) must be finite and ordered T > R > P > S",
                    temptation, reward, punishment, sucker
                ),
            });
        }
        Ok(Self { reward, sucker, temptation, punishment })
    }

    /// Mutual-cooperation payoff (R).
    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Lone-cooperator payoff (S).
    pub fn sucker(&self) -> f64 {
        self.sucker
    }

    /// Lone-defector payoff (T).
    pub fn temptation(&self) -> f64 {
        self.temptation
    }

    /// Mutual-defection payoff (P).
    pub fn punishment(&self) -> f64 {
        self.punishment
    }

    /// Payoff pair (Alice, Bob) for a classical outcome.
    pub fn pair(&self, outcome: Outcome) -> (f64, f64) {
        match outcome {
            Outcome::CC => (self.reward, self.reward),
            Outcome::CD => (self.sucker, self.temptation),
            Outcome::DC => (self.temptation, self.sucker),
            Outcome::DD => (self.punishment, self.punishment),
        }
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PayoffMatrix[T={}, R={}, P={}, S={}]",
            self.temptation, self.reward, self.punishment, self.sucker
        )
    }
}

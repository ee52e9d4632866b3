// src/game/engine.rs

use crate::core::{GameState, Player, QpdError, Strategy};
use crate::gates;
use crate::validation;

/// Closed-form evolution of the fixed protocol circuit.
/// (Internal visibility)
///
/// Mathematically equivalent to executing the gate sequence
/// J(γ) · (U_A ⊗ U_B) · J(γ)† on a circuit simulator and reading out in
/// the classical basis, but evaluated directly on the four-amplitude
/// joint state, with no sampling noise and constant cost per query.
/// The three stages are applied in circuit order:
///
/// 1. the entangler J(γ) acting on |00⟩,
/// 2. each player's strategy unitary on their own qubit,
/// 3. the disentangler J(γ)†.
pub(crate) struct EwlEngine {
    /// Joint state of the two-qubit register being evolved.
    state: GameState,
}

impl EwlEngine {
    /// Initializes the engine in the |00⟩ baseline state.
    pub(crate) fn init() -> Self {
        Self { state: GameState::initial() }
    }

    /// Runs the full protocol for one parameter triple, leaving the
    /// engine holding the pre-readout state.
    ///
    /// The parameter is validated before any amplitude work; the final
    /// state's normalization is checked afterwards so a malformed state
    /// can never silently reach payoff contraction.
    pub(crate) fn run(
        &mut self,
        gamma: f64,
        alice: Strategy,
        bob: Strategy,
    ) -> Result<(), QpdError> {
        validation::check_gamma(gamma)?;

        self.state = GameState::initial();
        self.state.apply_pair(&gates::entangler(gamma));
        self.state.apply_single(Player::Alice.qubit_index(), &gates::strategy_matrix(alice));
        self.state.apply_single(Player::Bob.qubit_index(), &gates::strategy_matrix(bob));
        self.state.apply_pair(&gates::disentangler(gamma));

        validation::check_normalization(&self.state, None)?;
        Ok(())
    }

    /// Read-only view of the evolved state.
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }
}

//! Numerical constants shared across the game model.

/// Protocol constants: payoff values, parameter domain, tolerances.
pub mod game_constants {
    /// Upper end of the entanglement range (π/2 is maximal entanglement;
    /// 0 recovers the classical game).
    pub const MAX_GAMMA: f64 = std::f64::consts::FRAC_PI_2;

    /// Mutual-cooperation payoff (R) in the standard dilemma.
    pub const REWARD: f64 = 3.0;
    /// Lone-cooperator payoff (S) in the standard dilemma.
    pub const SUCKER: f64 = 0.0;
    /// Lone-defector payoff (T) in the standard dilemma.
    pub const TEMPTATION: f64 = 5.0;
    /// Mutual-defection payoff (P) in the standard dilemma.
    pub const PUNISHMENT: f64 = 1.0;

    /// Allowed deviation of Sum(|c_i|^2) from 1.0.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Threshold below which an amplitude is treated as negligible.
    pub const AMPLITUDE_TOLERANCE: f64 = 1e-12;
    /// Tolerance when comparing expected payoffs in equilibrium analysis.
    pub const PAYOFF_TOLERANCE: f64 = 1e-9;
}

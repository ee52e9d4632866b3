//! Error handling logic

use std::fmt;

/// Error types surfaced by the payoff engine and its analysis helpers.
///
/// The engine is a pure numerical computation over a fixed 4-dimensional
/// basis, so the failure surface is small: either a caller handed us a
/// parameter outside its documented domain, or the amplitude algebra
/// drifted out of tolerance (which indicates a bug, not a runtime
/// condition to recover from).
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QpdError {
    /// A caller-supplied parameter lies outside its documented domain.
    /// Raised for an entanglement parameter outside [0, π/2], a payoff
    /// table violating the dilemma ordering, or a zero-shot sampling
    /// request. Out-of-range values are rejected, not clamped.
    InvalidParameter {
        /// InvalidParameter failure message
        message: String
    },

    /// Amplitude normalization drifted outside tolerance during evolution.
    /// The protocol applies only unitary operators, so this should never
    /// occur; if it does, the engine surfaces it instead of returning
    /// payoffs computed from a malformed state.
    NumericalInstability {
        /// NumericalInstability failure message
        message: String
    },
}

impl fmt::Display for QpdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QpdError::InvalidParameter { message } => write!(f, "Invalid Parameter: {}", message),
            QpdError::NumericalInstability { message } => write!(f, "Numerical Instability: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QpdError {}

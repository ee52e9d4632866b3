// src/validation/mod.rs

//! Provides functions to validate parameters, states and distributions.

use crate::core::constants::game_constants::{AMPLITUDE_TOLERANCE, MAX_GAMMA, NORM_TOLERANCE};
use crate::core::{GameState, QpdError};

/// Checks that an entanglement parameter lies within the protocol's
/// domain [0, π/2].
///
/// Out-of-range (or non-finite) values are rejected rather than clamped,
/// so a caller that prefers clamping must do so before the query.
///
/// # Returns
/// * `Ok(())` if the parameter is usable.
/// * `Err(QpdError::InvalidParameter)` otherwise.
pub fn check_gamma(gamma: f64) -> Result<(), QpdError> {
    if !gamma.is_finite() || !(0.0..=MAX_GAMMA).contains(&gamma) {
        return Err(QpdError::InvalidParameter {
            message: format!("entanglement parameter {} is outside [0, π/2]", gamma),
        });
    }
    Ok(())
}

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `GameState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QpdError::NumericalInstability)` if normalization fails.
pub fn check_normalization(state: &GameState, tolerance: Option<f64>) -> Result<(), QpdError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QpdError::NumericalInstability {
            message: format!(
                "state vector normalization failed. Sum(|c_i|^2) = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks an outcome distribution: entries must be valid probabilities and
/// the total must be ≈ 1.0.
///
/// # Arguments
/// * `distribution` - Probabilities over the four classical outcomes.
/// * `tolerance` - Allowed deviation of the total from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if the distribution is well formed.
/// * `Err(QpdError::NumericalInstability)` otherwise.
pub fn check_distribution(distribution: &[f64; 4], tolerance: Option<f64>) -> Result<(), QpdError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let mut total = 0.0;
    for (index, p) in distribution.iter().enumerate() {
        if !p.is_finite() || *p < -AMPLITUDE_TOLERANCE {
            return Err(QpdError::NumericalInstability {
                message: format!("outcome probability {} at basis index {} is invalid", p, index),
            });
        }
        total += p;
    }
    if (total - 1.0).abs() > effective_tolerance {
        Err(QpdError::NumericalInstability {
            message: format!(
                "outcome probabilities sum to {} (deviation > {})",
                total, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

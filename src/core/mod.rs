// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod payoff;
pub mod player;
pub mod state;
pub mod strategy;

// Re-export public types for convenient access via `qpd::core::TypeName`
pub use error::QpdError;
pub use payoff::{Outcome, PayoffMatrix};
pub use player::Player;
pub use state::GameState;
pub use strategy::Strategy;

pub mod constants;
pub use constants::game_constants::MAX_GAMMA; // Re-export

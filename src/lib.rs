// src/lib.rs

//! `qpd` - Closed-form simulation of the Eisert-Wilkens-Lewenstein (EWL)
//! quantization of the Prisoner's Dilemma.
//!
//! The crate evaluates the fixed EWL circuit (entangler J(γ), one
//! strategy unitary per player, disentangler J(γ)†) directly on the
//! four-amplitude joint state and contracts the resulting outcome
//! distribution against the classical payoff table. No circuit backend
//! and no sampling noise: identical queries return identical payoffs,
//! which is what lets front-ends cache points of a payoff curve safely.

pub mod core;
pub(crate) mod gates;
pub mod game;
pub mod analysis;
pub mod sampling;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{GameState, Outcome, PayoffMatrix, Player, QpdError, Strategy, MAX_GAMMA};
pub use crate::game::{EwlGame, GameResult};
pub use crate::analysis::{PayoffTable, SweepPoint};
pub use crate::sampling::OutcomeCounts;
pub use crate::validation::{check_distribution, check_gamma, check_normalization};

// Example 1: Classical limit
// With no entanglement the quantized game reduces to the classical
// dilemma: a lone defector collects the temptation payoff.
/// ```
/// use qpd::{EwlGame, Strategy};
///
/// let game = EwlGame::new();
///
/// match game.play(0.0, Strategy::Defect, Strategy::Cooperate) {
///     Ok(result) => {
///         println!("\n--- Example 1: Classical limit ---");
///         println!("{}", result);
///
///         // Analysis: the γ=0 entangler pair is the identity, so the
///         // defect flip acts alone and the readout is DC with
///         // certainty. Standard constants give (T, S) = (5, 0).
///         let (alice, bob) = result.payoffs();
///         assert!((alice - 5.0).abs() < 1e-9);
///         assert!((bob - 0.0).abs() < 1e-9);
///     }
///     Err(e) => {
///         eprintln!("Example 1 failed: {}", e);
///         assert!(false, "Example 1 failed"); // Force test failure
///     }
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Quantum equilibrium shift
// At maximal entanglement the mutual Quantum play earns both players the
// reward payoff and is the game's only pure equilibrium.
/// ```
/// use qpd::{analysis, EwlGame, Strategy, MAX_GAMMA};
///
/// let game = EwlGame::new();
///
/// match game.play(MAX_GAMMA, Strategy::Quantum, Strategy::Quantum) {
///     Ok(result) => {
///         println!("\n--- Example 2: Quantum equilibrium ---");
///         println!("{}", result);
///
///         // Analysis: J(π/2)|00⟩ is maximally entangled; the i·Z pair
///         // only flips signs inside the superposition and J† undoes
///         // the entanglement, landing on CC with certainty: (R, R).
///         let (alice, bob) = result.payoffs();
///         assert!((alice - 3.0).abs() < 1e-9);
///         assert!((bob - 3.0).abs() < 1e-9);
///
///         // The equilibrium has shifted away from mutual defection.
///         let equilibria = analysis::pure_equilibria(&game, MAX_GAMMA)
///             .expect("equilibrium analysis failed");
///         assert_eq!(equilibria, vec![(Strategy::Quantum, Strategy::Quantum)]);
///     }
///     Err(e) => {
///         eprintln!("Example 2 failed: {}", e);
///         assert!(false, "Example 2 failed"); // Force test failure
///     }
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

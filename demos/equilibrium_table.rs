//! Example demonstrating equilibrium analysis at both ends of the
//! entanglement range: the full payoff table, best responses, and the
//! shift of the pure equilibrium from mutual defection to mutual
//! quantum play.

use qpd::{analysis, EwlGame, QpdError, Strategy, MAX_GAMMA};

fn print_equilibria(game: &EwlGame, gamma: f64) -> Result<(), QpdError> {
    let table = analysis::payoff_table(game, gamma)?;
    println!("\n{}", table);

    let equilibria = analysis::pure_equilibria(game, gamma)?;
    if equilibria.is_empty() {
        println!("No pure-strategy equilibrium at gamma = {:.4}.", gamma);
    } else {
        for (alice, bob) in equilibria {
            println!("Pure equilibrium at gamma = {:.4}: ({}, {})", gamma, alice, bob);
        }
    }
    Ok(())
}

fn main() -> Result<(), QpdError> {
    println!("--- qpd Example: Equilibrium Shift ---");

    let game = EwlGame::new();

    // Classical limit: the familiar dilemma, defection dominates.
    print_equilibria(&game, 0.0)?;
    let classical_best = analysis::best_responses(&game, 0.0, Strategy::Cooperate)?;
    println!("Best response to C at gamma = 0: {:?}", classical_best);

    // Maximal entanglement: the quantum move takes over.
    print_equilibria(&game, MAX_GAMMA)?;
    let quantum_best = analysis::best_responses(&game, MAX_GAMMA, Strategy::Defect)?;
    println!("Best response to D at gamma = π/2: {:?}", quantum_best);

    Ok(())
}

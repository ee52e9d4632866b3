//! Example demonstrating the entanglement sweep: how the quantum move's
//! payoff against a defector grows with γ while the classical baseline
//! stays flat.

use qpd::{analysis, EwlGame, QpdError, Strategy};

fn main() -> Result<(), QpdError> {
    println!("--- qpd Example: Entanglement Sweep ---");

    let game = EwlGame::new();
    let samples = 13;

    // Baseline: mutual defection, the classical equilibrium play.
    let classical = analysis::sweep(&game, Strategy::Defect, Strategy::Defect, samples)?;
    // The interesting curve: the quantum move against a defector.
    let quantum = analysis::sweep(&game, Strategy::Quantum, Strategy::Defect, samples)?;

    println!("\n{:>8} | {:>12} | {:>12}", "gamma", "D vs D (A)", "Q vs D (A)");
    println!("{}", "-".repeat(40));
    for (baseline, point) in classical.iter().zip(quantum.iter()) {
        println!(
            "{:>8.4} | {:>12.4} | {:>12.4}",
            point.gamma, baseline.payoff_a, point.payoff_a
        );
    }

    println!("\nAt γ=0 the quantum move earns the sucker payoff like a");
    println!("cooperator; at γ=π/2 it collects the full temptation payoff.");
    println!("The mutual-defection baseline never moves.");

    Ok(())
}

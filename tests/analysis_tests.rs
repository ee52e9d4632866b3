// tests/analysis_tests.rs

use qpd::analysis::{self, PayoffTable};
use qpd::sampling;
use qpd::{EwlGame, Outcome, QpdError, Strategy, MAX_GAMMA};

const TOLERANCE: f64 = 1e-9;

fn table_at(game: &EwlGame, gamma: f64) -> PayoffTable {
    analysis::payoff_table(game, gamma)
        .unwrap_or_else(|e| panic!("payoff table at gamma = {} failed: {}", gamma, e))
}

#[test]
fn test_sweep_covers_the_domain() -> Result<(), QpdError> {
    let game = EwlGame::new();
    let points = analysis::sweep(&game, Strategy::Quantum, Strategy::Defect, 25)?;

    assert_eq!(points.len(), 25);
    assert_eq!(points[0].gamma, 0.0);
    assert_eq!(points[24].gamma, MAX_GAMMA);
    for pair in points.windows(2) {
        assert!(pair[0].gamma < pair[1].gamma, "sweep gammas must increase");
    }
    Ok(())
}

#[test]
fn test_sweep_matches_single_queries() -> Result<(), QpdError> {
    let game = EwlGame::new();
    let points = analysis::sweep(&game, Strategy::Quantum, Strategy::Defect, 9)?;
    for point in &points {
        let (pay_a, pay_b) =
            game.expected_payoffs(point.gamma, Strategy::Quantum, Strategy::Defect)?;
        assert_eq!(point.payoff_a.to_bits(), pay_a.to_bits());
        assert_eq!(point.payoff_b.to_bits(), pay_b.to_bits());
    }
    Ok(())
}

#[test]
fn test_sweep_mutual_defection_is_flat() -> Result<(), QpdError> {
    // D vs D stays at the punishment pair for every γ, the baseline
    // curve of the entanglement experiment.
    let game = EwlGame::new();
    for point in analysis::sweep(&game, Strategy::Defect, Strategy::Defect, 15)? {
        assert!(
            (point.payoff_a - 1.0).abs() < TOLERANCE && (point.payoff_b - 1.0).abs() < TOLERANCE,
            "D vs D drifted at gamma = {}",
            point.gamma
        );
    }
    Ok(())
}

#[test]
fn test_sweep_needs_two_samples() {
    let game = EwlGame::new();
    for samples in [0, 1] {
        assert!(matches!(
            analysis::sweep(&game, Strategy::Cooperate, Strategy::Cooperate, samples),
            Err(QpdError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn test_payoff_table_agrees_with_queries() -> Result<(), QpdError> {
    let game = EwlGame::new();
    let gamma = 0.8;
    let table = table_at(&game, gamma);
    for alice in Strategy::ALL {
        for bob in Strategy::ALL {
            let direct = game.expected_payoffs(gamma, alice, bob)?;
            let entry = table.pair(alice, bob);
            assert_eq!(entry.0.to_bits(), direct.0.to_bits());
            assert_eq!(entry.1.to_bits(), direct.1.to_bits());
        }
    }
    assert_eq!(table.gamma(), gamma);
    Ok(())
}

#[test]
fn test_payoff_table_display_lists_all_strategies() {
    let game = EwlGame::new();
    let rendered = format!("{}", table_at(&game, MAX_GAMMA));
    for strategy in Strategy::ALL {
        assert!(rendered.contains(strategy.label()));
    }
    assert!(rendered.contains("(3.0, 3.0)"));
}

#[test]
fn test_best_responses_shift_with_entanglement() -> Result<(), QpdError> {
    let game = EwlGame::new();

    // Classically, defection is the unique best response to cooperation.
    let classical = analysis::best_responses(&game, 0.0, Strategy::Cooperate)?;
    assert_eq!(classical, vec![Strategy::Defect]);

    // At maximal entanglement the Quantum move dominates against both
    // defection and the Quantum move itself.
    let vs_defect = analysis::best_responses(&game, MAX_GAMMA, Strategy::Defect)?;
    assert_eq!(vs_defect, vec![Strategy::Quantum]);
    let vs_quantum = analysis::best_responses(&game, MAX_GAMMA, Strategy::Quantum)?;
    assert_eq!(vs_quantum, vec![Strategy::Quantum]);
    Ok(())
}

#[test]
fn test_equilibrium_shift() -> Result<(), QpdError> {
    // The headline result: mutual defection is the only classical
    // equilibrium, mutual Quantum play the only one at γ=π/2.
    let game = EwlGame::new();

    let classical = analysis::pure_equilibria(&game, 0.0)?;
    assert_eq!(classical, vec![(Strategy::Defect, Strategy::Defect)]);

    let quantum = analysis::pure_equilibria(&game, MAX_GAMMA)?;
    assert_eq!(quantum, vec![(Strategy::Quantum, Strategy::Quantum)]);
    Ok(())
}

#[test]
fn test_sampling_is_seed_deterministic() -> Result<(), QpdError> {
    let game = EwlGame::new();
    let first = sampling::sample_outcomes(&game, 0.9, Strategy::Quantum, Strategy::Defect, 512, 7)?;
    let second =
        sampling::sample_outcomes(&game, 0.9, Strategy::Quantum, Strategy::Defect, 512, 7)?;
    assert_eq!(first, second, "same seed must reproduce the same histogram");

    let other = sampling::sample_outcomes(&game, 0.9, Strategy::Quantum, Strategy::Defect, 512, 8)?;
    assert_eq!(other.shots(), 512);
    Ok(())
}

#[test]
fn test_sampling_degenerate_distribution() -> Result<(), QpdError> {
    // γ=0 mutual defection resolves to DD with certainty, so every shot
    // must land there regardless of seed.
    let game = EwlGame::new();
    let counts = sampling::sample_outcomes(&game, 0.0, Strategy::Defect, Strategy::Defect, 256, 3)?;
    assert_eq!(counts.count(Outcome::DD), 256);
    assert_eq!(counts.count(Outcome::CC), 0);
    assert!((counts.frequency(Outcome::DD) - 1.0).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_sampling_tracks_exact_distribution() -> Result<(), QpdError> {
    // At γ=π/4 the Q vs D split is 50/50 between CD and DC; a few
    // thousand shots should sit near it, and the empirical payoffs near
    // the exact ones.
    let game = EwlGame::new();
    let gamma = MAX_GAMMA / 2.0;
    let counts =
        sampling::sample_outcomes(&game, gamma, Strategy::Quantum, Strategy::Defect, 4096, 42)?;

    assert!((counts.frequency(Outcome::CD) - 0.5).abs() < 0.05);
    assert!((counts.frequency(Outcome::DC) - 0.5).abs() < 0.05);
    assert_eq!(counts.count(Outcome::CC), 0);
    assert_eq!(counts.count(Outcome::DD), 0);

    let exact = game.expected_payoffs(gamma, Strategy::Quantum, Strategy::Defect)?;
    let empirical = counts.expected_payoffs(game.payoff_matrix());
    assert!((empirical.0 - exact.0).abs() < 0.25);
    assert!((empirical.1 - exact.1).abs() < 0.25);
    Ok(())
}

#[test]
fn test_sampling_rejects_zero_shots() {
    let game = EwlGame::new();
    assert!(matches!(
        sampling::sample_outcomes(&game, 0.0, Strategy::Cooperate, Strategy::Cooperate, 0, 1),
        Err(QpdError::InvalidParameter { .. })
    ));
}

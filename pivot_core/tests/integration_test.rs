//! Integration test: Load config -> Parse input -> Pivot -> Compare
//!
//! Walks the full flow a command layer would take, from a gear table on disk
//! to a verdict and comparisons.

use pivot_core::{
    calculator::PivotCalculator,
    config::{load_pivot_config, parse_pivot_config, ConfigError},
    input::BaseStat,
    pivot::PivotEngine,
    types::{Difficulty, GearSlot, PivotStrategy},
    usage::{Operation, UsageCounter},
    RollStanding, Winner,
};
use std::fs;
use std::sync::Arc;
use std::thread;

/// Route engine logs to the test output when RUST_LOG is set
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

#[test]
fn test_full_config_to_comparison_flow() {
    init_tracing();
    separator("INTEGRATION TEST: Config -> Input -> Pivot -> Compare");

    // =========================================================================
    // STEP 1: Load the gear table from disk
    // =========================================================================
    separator("STEP 1: Loading Gear Config");

    let config_path = std::env::temp_dir().join(format!(
        "pivot_core_integration_{}.toml",
        std::process::id()
    ));
    fs::write(&config_path, include_str!("../config/gear.toml"))
        .expect("Failed to write temp config");

    let config = load_pivot_config(&config_path).expect("Failed to load gear config");
    let _ = fs::remove_file(&config_path);

    for (slot, profile) in config.table.iter() {
        println!(
            "  {:<9} common {:>6} rare {:>6} ({})",
            slot, profile.common_flat, profile.rare_flat, profile.attribute
        );
    }

    let calc = PivotCalculator::new(PivotEngine::from_config(config), UsageCounter::new());

    // =========================================================================
    // STEP 2: Parse user input the way the command layer receives it
    // =========================================================================
    separator("STEP 2: Parsing Input");

    let slot: GearSlot = "ceinture".parse().expect("alias should resolve");
    let base: BaseStat = "150000".parse().expect("valid base stat");
    println!("  Slot: {}  Base: {}", slot, base);
    assert_eq!(slot, GearSlot::Belt);

    // =========================================================================
    // STEP 3: Precise pivot for a full-quality rare belt
    // =========================================================================
    separator("STEP 3: Precise Pivot");

    let result = calc.precise(slot, 100.0, base).expect("valid inputs");
    println!(
        "  Pivot: {}%  Incumbent: {}  Feasible: {}",
        result.pivot_percent, result.incumbent_total, result.feasible
    );

    assert!((result.incumbent_total - 177_900.0).abs() < f64::EPSILON);
    assert!((result.candidate_flat - 12_400.0).abs() < f64::EPSILON);
    assert!((result.pivot_percent - 10.33).abs() < f64::EPSILON);
    assert!(result.feasible);
    assert_eq!(calc.engine().classify(result.pivot_percent), Difficulty::Medium);

    // =========================================================================
    // STEP 4: Legacy estimate for a smaller character
    // =========================================================================
    separator("STEP 4: Legacy Pivot");

    let small = BaseStat::from_displayed(180_000, 54_000).expect("positive base");
    let legacy = calc
        .evaluate(slot, PivotStrategy::Legacy, 100.0, small)
        .expect("valid inputs");
    println!("  Legacy pivot at {}: {}% ({})", small, legacy.pivot_percent, legacy.difficulty);

    assert!((legacy.pivot_percent - 9.44).abs() < f64::EPSILON);
    assert_eq!(legacy.difficulty, Difficulty::Easy);

    // =========================================================================
    // STEP 5: Is the current roll already enough?
    // =========================================================================
    separator("STEP 5: Current Roll vs Pivot");

    let behind = calc.compare_to_incumbent(&result, 9.0).expect("valid roll");
    let ahead = calc.compare_to_incumbent(&result, 12.0).expect("valid roll");
    let exact = calc
        .compare_to_incumbent(&result, result.pivot_percent)
        .expect("valid roll");

    println!("  9%:  {:?} by {}", behind.standing, behind.margin_absolute);
    println!("  12%: {:?} by {}", ahead.standing, ahead.margin_absolute);

    assert_eq!(behind.standing, RollStanding::Behind);
    assert!((behind.margin_percent - 1.33).abs() < f64::EPSILON);
    assert_eq!(ahead.standing, RollStanding::Ahead);
    assert!((ahead.margin_absolute - 2_500.0).abs() < f64::EPSILON);
    assert_eq!(exact.standing, RollStanding::Ahead);
    assert!(exact.margin_percent.abs() < f64::EPSILON);

    // =========================================================================
    // STEP 6: Two rare belts head to head
    // =========================================================================
    separator("STEP 6: Candidate vs Candidate");

    let duel = calc
        .compare_candidates(slot, base, 50.0, 85.22)
        .expect("valid qualities");
    println!(
        "  A: {}  B: {}  winner {:?} by {}%",
        duel.total_a, duel.total_b, duel.winner, duel.difference_percent
    );

    assert_eq!(duel.winner, Winner::B);
    assert!((duel.total_a - 156_200.0).abs() < f64::EPSILON);
    assert!((duel.total_b - 160_567.0).abs() < f64::EPSILON);
    assert!((duel.difference_percent - 2.91).abs() < f64::EPSILON);

    // =========================================================================
    // STEP 7: Usage was recorded through the injected counter
    // =========================================================================
    separator("STEP 7: Usage");

    let usage = calc.recorder();
    for ((op, slot), n) in usage.snapshot() {
        println!("  {:<18} {:<9} {}", op, slot, n);
    }
    assert_eq!(usage.count(Operation::PrecisePivot, GearSlot::Belt), 1);
    assert_eq!(usage.count(Operation::LegacyPivot, GearSlot::Belt), 1);
    assert_eq!(usage.count(Operation::CompareIncumbent, GearSlot::Belt), 3);
    assert_eq!(usage.count(Operation::CompareCandidates, GearSlot::Belt), 1);
    assert_eq!(usage.total(), 6);

    separator("INTEGRATION TEST COMPLETE");
}

#[test]
fn test_rebalanced_config() {
    init_tracing();

    // A different game: 20% max substat and wider bands
    let toml = r#"
[constants]
max_substat = 20
easy_below = 12
hard_above = 18

[slots.belt]
common_flat = 1000
rare_flat = 3000
attribute = "hp"

[slots.orb]
common_flat = 800
rare_flat = 1600
attribute = "hp"

[slots.bracelet]
common_flat = 100
rare_flat = 250
attribute = "atk"

[slots.ring]
common_flat = 60
rare_flat = 150
attribute = "atk"

[slots.necklace]
common_flat = 70
rare_flat = 140
attribute = "def"

[slots.earrings]
common_flat = 30
rare_flat = 80
attribute = "def"
"#;

    let config = parse_pivot_config(toml).expect("valid config");
    let calc = PivotCalculator::new(PivotEngine::from_config(config), UsageCounter::new());
    let base = BaseStat::new(50_000).unwrap();

    // incumbent = 50000 + 1000 + 10000 = 61000
    // pivot = (61000 - 50000 - 3000) / 50000 * 100 = 16
    let result = calc.precise(GearSlot::Belt, 100.0, base).unwrap();
    assert!((result.pivot_percent - 16.0).abs() < f64::EPSILON);
    assert!(result.feasible);
    assert_eq!(calc.engine().classify(result.pivot_percent), Difficulty::Medium);

    // An 18% roll is legal under this balance
    let cmp = calc.compare_to_incumbent(&result, 18.0).unwrap();
    assert_eq!(cmp.standing, RollStanding::Ahead);
    assert!((cmp.margin_absolute - 1_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_broken_config_is_rejected() {
    let toml = r#"
[slots.belt]
common_flat = 12400
rare_flat = 5400
attribute = "hp"
"#;
    let err = parse_pivot_config(toml).unwrap_err();
    println!("  {}", err);
    assert!(matches!(
        err,
        ConfigError::InvalidProfile {
            slot: GearSlot::Belt,
            ..
        }
    ));
}

#[test]
fn test_shared_calculator_across_threads() {
    let calc = Arc::new(PivotCalculator::new(
        PivotEngine::default(),
        UsageCounter::new(),
    ));
    let base = BaseStat::new(150_000).unwrap();

    let handles: Vec<_> = GearSlot::all()
        .iter()
        .map(|&slot| {
            let calc = Arc::clone(&calc);
            thread::spawn(move || {
                let mut pivots = Vec::new();
                for quality in [0.0, 25.0, 50.0, 75.0, 100.0] {
                    pivots.push(calc.precise(slot, quality, base).unwrap().pivot_percent);
                }
                pivots
            })
        })
        .collect();

    for handle in handles {
        let pivots = handle.join().unwrap();
        assert!(pivots.windows(2).all(|w| w[1] <= w[0]));
    }

    assert_eq!(calc.recorder().operation_total(Operation::PrecisePivot), 30);
}

//! Integration tests for scaling-frontier
//!
//! Tests cover:
//! 1. Frontier regression scenario at the published defaults
//! 2. Regime classification semantics (flip, tie, unspecified)
//! 3. Overhead curve well-definedness and highlight behavior
//! 4. Coefficient JSON file round-trip
//! 5. End-to-end evaluate + report + chart

use std::fs;

use scaling_frontier::{
    evaluate, format_scientific, overhead_ratio, Coefficients, FrontierSolution, OverheadChart,
    OverheadCurve, Regime, TrainingInputs, CURVE_POINTS,
};

// ============================================================================
// Test 1: Frontier Regression Scenario
// ============================================================================

#[test]
fn test_frontier_regression_at_1000_pf_days() {
    let coefficients = Coefficients::default();
    let solution = FrontierSolution::solve(1000.0, &coefficients);

    // Direct formula evaluation is the source of truth.
    assert_eq!(solution.n_opt, 1.3e9 * 1000f64.powf(0.73));
    assert_eq!(solution.b_crit, 2.0e6 * 1000f64.powf(0.24));
    assert_eq!(solution.s_min, 5.4e3 * 1000f64.powf(0.03));
    assert_eq!(solution.d_opt, 2.0e10 * 1000f64.powf(0.27));

    // Ballpark sanity against precomputed magnitudes.
    assert!((solution.n_opt / 2.013e11 - 1.0).abs() < 0.01);
    assert!((solution.b_crit / 1.050e7 - 1.0).abs() < 0.01);
    assert!((solution.s_min / 6.643e3 - 1.0).abs() < 0.01);
    assert!((solution.d_opt / 1.291e11 - 1.0).abs() < 0.01);
}

// ============================================================================
// Test 2: Regime Classification Semantics
// ============================================================================

#[test]
fn test_regime_flip_tie_and_unspecified() {
    let coefficients = Coefficients::default();

    let data_limited = Regime::classify(1e12, 1e4, &coefficients);
    let capacity_limited = Regime::classify(1e4, 1e12, &coefficients);
    assert_eq!(data_limited, Regime::DataLimited);
    assert_eq!(capacity_limited, Regime::CapacityLimited);

    // Tie resolves to capacity-limited (the `else` branch).
    let symmetric = Coefficients {
        n_c: 2.0,
        d_c: 2.0,
        a_n: 0.3,
        a_d: 0.3,
        ..coefficients
    };
    assert_eq!(Regime::classify(9.0, 9.0, &symmetric), Regime::CapacityLimited);

    // Any unspecified side is undetermined.
    assert_eq!(Regime::classify(-1.0, 1e10, &coefficients), Regime::Undetermined);
    assert_eq!(Regime::classify(1e10, 0.0, &coefficients), Regime::Undetermined);
}

#[test]
fn test_regime_example_with_defaults() {
    // N = D = 1e10 with default constants: the regime must match the direct
    // comparison of d_c * d^a_d against n_c * n^a_n.
    let coefficients = Coefficients::default();
    let data_side = coefficients.d_c * 1e10f64.powf(coefficients.a_d);
    let capacity_side = coefficients.n_c * 1e10f64.powf(coefficients.a_n);
    assert!(data_side < capacity_side);
    assert_eq!(Regime::classify(1e10, 1e10, &coefficients), Regime::DataLimited);
}

// ============================================================================
// Test 3: Overhead Curve
// ============================================================================

#[test]
fn test_overhead_curve_filters_and_orders() {
    let coefficients = Coefficients::default();
    let n_eff = 1.3e9;
    let curve = OverheadCurve::generate(n_eff, coefficients.a_n, coefficients.a_s);

    assert!(curve.points.len() > 10);
    assert!(curve.points.len() <= CURVE_POINTS);
    for pair in curve.points.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
    for &(_, ratio) in &curve.points {
        assert!(ratio.is_finite());
    }

    // Upper endpoint survives filtering and sits at n_eff * 1e2.
    let last = curve.points.last().unwrap();
    assert!((last.0 / (n_eff * 1e2) - 1.0).abs() < 1e-12);
}

#[test]
fn test_overhead_highlight_rules() {
    let coefficients = Coefficients::default();
    let curve = OverheadCurve::generate(1.3e9, coefficients.a_n, coefficients.a_s);

    let inside = curve.clone().with_highlight(5.0e9);
    let (n, ratio) = inside.highlight.unwrap();
    assert_eq!(n, 5.0e9);
    assert_eq!(ratio, overhead_ratio(5.0e9, 1.3e9, coefficients.a_n, coefficients.a_s));

    assert!(curve.clone().with_highlight(1.3e9 * 1e4).highlight.is_none());
    assert!(curve.with_highlight(-1.0).highlight.is_none());
}

// ============================================================================
// Test 4: Coefficient File Round-Trip
// ============================================================================

#[test]
fn test_coefficients_json_file_roundtrip() {
    let dir = std::env::temp_dir().join("scaling_frontier_test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("coefficients.json");

    let original = Coefficients {
        p_n: 0.70,
        n_e: 1.1e9,
        ..Coefficients::default()
    };
    original.to_json_file(&path).unwrap();
    let restored = Coefficients::from_json_file(&path).unwrap();
    assert_eq!(original, restored);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_coefficients_partial_file_fills_defaults() {
    let dir = std::env::temp_dir().join("scaling_frontier_test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("partial.json");

    fs::write(&path, r#"{"a_n": 0.08, "a_s": 0.8}"#).unwrap();
    let restored = Coefficients::from_json_file(&path).unwrap();
    assert_eq!(restored.a_n, 0.08);
    assert_eq!(restored.a_s, 0.8);
    assert_eq!(restored.p_n, Coefficients::default().p_n);

    fs::remove_file(&path).unwrap();
}

// ============================================================================
// Test 5: End-to-End Evaluation
// ============================================================================

#[test]
fn test_evaluate_report_and_chart_end_to_end() {
    let coefficients = Coefficients::default();
    let inputs = TrainingInputs::new()
        .with_compute(1000.0)
        .with_params(1.0e11)
        .with_dataset(1.0e10);

    let evaluation = evaluate(inputs, &coefficients);

    let frontier = evaluation.frontier.unwrap();
    assert!(frontier.is_finite());
    assert_eq!(evaluation.regime, Regime::DataLimited);
    assert_eq!(evaluation.n_eff(), frontier.n_opt);

    let report = evaluation.report();
    assert!(report.contains("Compute Efficient Frontier"));
    assert!(report.contains(&format_scientific(frontier.n_opt)));
    assert!(report.contains("data-limited"));

    let chart = OverheadChart::new(90, 25).render(&evaluation.overhead).unwrap();
    assert!(chart.contains("Compute Overhead vs Model Size"));
    assert_eq!(chart.lines().count(), 25);
}

#[test]
fn test_evaluate_all_unspecified_is_symbolic_but_complete() {
    let evaluation = evaluate(TrainingInputs::new(), &Coefficients::default());
    assert!(evaluation.frontier.is_none());
    assert_eq!(evaluation.regime, Regime::Undetermined);
    assert!(!evaluation.overhead.points.is_empty());

    let report = evaluation.report();
    assert!(report.contains("N_opt = "));
    assert!(report.contains("B_crit = "));
    assert!(report.contains("S_min = "));
    assert!(report.contains("D_opt = "));
}

//! Walkthrough of the compute-efficient frontier and regime classification.
//!
//! Run with: cargo run --example frontier_demo

fn main() {
    println!("=== Scaling-Law Frontier Demo ===\n");

    demo_frontier_sweep();
    println!("\n{}\n", "=".repeat(60));

    demo_full_report();
    println!("\n{}\n", "=".repeat(60));

    demo_regime_classification();
}

fn demo_frontier_sweep() {
    use scaling_frontier::{Coefficients, FrontierSolution};

    println!("Demo 1: Frontier Across Compute Budgets");
    println!("{}", "-".repeat(40));

    let coefficients = Coefficients::default();
    for &budget in &[1.0, 10.0, 100.0, 1000.0, 1e4] {
        let solution = FrontierSolution::solve(budget, &coefficients);
        println!(
            "C = {:>8.0} PF-days  ->  N_opt = {:.2e}  B_crit = {:.2e}  S_min = {:.2e}  D_opt = {:.2e}",
            budget, solution.n_opt, solution.b_crit, solution.s_min, solution.d_opt
        );
    }
}

fn demo_full_report() {
    use scaling_frontier::{evaluate, Coefficients, TrainingInputs};

    println!("Demo 2: Equation Report (1000 PF-days, GPT-3-scale model)");
    println!("{}", "-".repeat(40));

    let inputs = TrainingInputs::new()
        .with_compute(1000.0)
        .with_params(1.75e11)
        .with_dataset(3.0e11);
    let evaluation = evaluate(inputs, &Coefficients::default());
    println!("{}", evaluation.report());
}

fn demo_regime_classification() {
    use scaling_frontier::{Coefficients, Regime};

    println!("Demo 3: Data-Limited vs Capacity-Limited");
    println!("{}", "-".repeat(40));

    let coefficients = Coefficients::default();
    let cases = [
        ("1B params, 10B tokens", 1.0e9, 1.0e10),
        ("100B params, 10B tokens", 1.0e11, 1.0e10),
        ("1B params, 10T tokens", 1.0e9, 1.0e13),
        ("unspecified params", -1.0, 1.0e10),
    ];
    for (label, n, d) in cases {
        let regime = Regime::classify(n, d, &coefficients);
        println!("{label:<26} -> {}", regime.description());
    }
}

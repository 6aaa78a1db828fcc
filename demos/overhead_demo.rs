//! Compute-overhead curve generation and terminal chart rendering.
//!
//! Run with: cargo run --example overhead_demo

fn main() {
    println!("=== Compute Overhead Demo ===\n");

    demo_curve_values();
    println!("\n{}\n", "=".repeat(60));

    demo_chart();
}

fn demo_curve_values() {
    use scaling_frontier::{overhead_ratio, Coefficients, OverheadCurve};

    println!("Demo 1: Overhead Ratios Around the Efficient Size");
    println!("{}", "-".repeat(40));

    let coefficients = Coefficients::default();
    let n_eff = 1.3e9;
    let curve = OverheadCurve::generate(n_eff, coefficients.a_n, coefficients.a_s);

    println!(
        "Generated {} well-defined points (ill-defined small-n points dropped)",
        curve.points.len()
    );
    for factor in [0.5, 1.0, 2.0, 10.0, 100.0] {
        let n = n_eff * factor;
        let ratio = overhead_ratio(n, n_eff, coefficients.a_n, coefficients.a_s);
        println!("n = {factor:>5}x N_eff  ->  C/C_min = {ratio:.3}");
    }
}

fn demo_chart() {
    use scaling_frontier::{evaluate, Coefficients, OverheadChart, TrainingInputs};

    println!("Demo 2: Terminal Chart (budget 1000 PF-days, own model highlighted)");
    println!("{}", "-".repeat(40));

    let inputs = TrainingInputs::new()
        .with_compute(1000.0)
        .with_params(1.0e12);
    let evaluation = evaluate(inputs, &Coefficients::default());

    let chart = OverheadChart::new(100, 28);
    match chart.render(&evaluation.overhead) {
        Ok(text) => print!("{text}"),
        Err(err) => eprintln!("chart rendering failed: {err}"),
    }
}

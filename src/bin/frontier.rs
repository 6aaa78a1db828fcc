//! Scaling-law frontier calculator.
//!
//! Usage:
//!   frontier [OPTIONS]
//!
//! Examples:
//!   # Frontier for a 1000 PF-day budget
//!   frontier --compute 1000
//!
//!   # Classify the training regime for a concrete model and dataset
//!   frontier --params 1e10 --tokens 2e10
//!
//!   # Full report with the overhead chart, custom coefficients
//!   frontier --compute 1e4 --params 5e11 --coefficients my_fit.json --chart

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scaling_frontier::{evaluate, Coefficients, OverheadChart, TrainingInputs, UNSPECIFIED};

#[derive(Parser)]
#[command(name = "frontier")]
#[command(about = "Evaluate compute-efficient training scaling laws")]
#[command(version)]
struct Args {
    /// Compute budget in PF-days (-1 = unspecified)
    #[arg(short = 'c', long, default_value_t = UNSPECIFIED)]
    compute: f64,

    /// Non-embedding parameter count (-1 = unspecified)
    #[arg(short = 'n', long, default_value_t = UNSPECIFIED)]
    params: f64,

    /// Dataset size in tokens (-1 = unspecified)
    #[arg(short = 'd', long, default_value_t = UNSPECIFIED)]
    tokens: f64,

    /// JSON file overriding the default coefficients
    #[arg(long)]
    coefficients: Option<PathBuf>,

    /// Render the compute-overhead chart
    #[arg(long)]
    chart: bool,

    /// Chart width in terminal cells
    #[arg(long, default_value = "100")]
    width: u16,

    /// Chart height in terminal cells
    #[arg(long, default_value = "30")]
    height: u16,

    /// Print the active coefficient set as JSON and exit
    #[arg(long)]
    dump_coefficients: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("scaling_frontier=info".parse()?),
        )
        .init();

    let coefficients = match &args.coefficients {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading coefficients");
            Coefficients::from_json_file(path)?
        }
        None => Coefficients::default(),
    };

    if args.dump_coefficients {
        println!("{}", serde_json::to_string_pretty(&coefficients)?);
        return Ok(());
    }

    let inputs = TrainingInputs::new()
        .with_compute(args.compute)
        .with_params(args.params)
        .with_dataset(args.tokens);

    let evaluation = evaluate(inputs, &coefficients);
    println!("{}", evaluation.report());

    if args.chart {
        let chart = OverheadChart::new(args.width, args.height);
        println!();
        print!("{}", chart.render(&evaluation.overhead)?);
    }

    Ok(())
}

//! Workload Plot - Main entry point
//!
//! Reads `workload_metrics.csv` and `workload_metrics_local.csv` from the
//! working directory and writes `latency_plot.svg` and `throughput_plot.svg`
//! next to them. No flags, no environment variables.

use anyhow::Context;
use workload_plot::config::PlotConfig;
use workload_plot::pipeline::{self, PlotInput};

fn main() {
    println!("Workload Plot v{}\n", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run() {
        eprintln!("\n✗ {:#}", e);
        std::process::exit(1);
    }

    println!("\n✓ All charts written");
}

fn run() -> anyhow::Result<()> {
    let config = PlotConfig::default();
    let inputs = PlotInput::defaults();

    pipeline::generate_plots(&inputs, &config).context("plot generation failed")?;
    Ok(())
}

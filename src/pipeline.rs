//! Shared plot generation pipeline
//!
//! The core load → extract → render sequence used by the binary.
//!
//! The pipeline:
//! 1. Loads every input CSV into a labeled dataset
//! 2. Reads the run configuration from the first dataset
//! 3. Renders the latency chart (circle markers, zero-clipped band)
//! 4. Renders the throughput chart (square markers)

use crate::config::PlotConfig;
use crate::metrics::{BandSeries, Metric, PlotError, Result, WorkloadMetrics};
use crate::render::{render_chart, ChartSpec, Marker};
use std::path::PathBuf;

/// One input CSV with the label used in legend entries
#[derive(Debug, Clone)]
pub struct PlotInput {
    pub label: String,
    pub path: PathBuf,
}

impl PlotInput {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        PlotInput {
            label: label.into(),
            path: path.into(),
        }
    }

    /// The fixed inputs read from the working directory
    pub fn defaults() -> Vec<PlotInput> {
        vec![
            PlotInput::new("metrics", "workload_metrics.csv"),
            PlotInput::new("local", "workload_metrics_local.csv"),
        ]
    }
}

/// Generate both charts from the given inputs
///
/// Returns the paths of the written chart files (latency first).
pub fn generate_plots(inputs: &[PlotInput], config: &PlotConfig) -> Result<Vec<String>> {
    if inputs.is_empty() {
        return Err(PlotError::Empty("no input datasets".to_string()));
    }

    // Load every dataset
    println!("[1/3] Loading {} dataset(s)...", inputs.len());
    let mut datasets: Vec<WorkloadMetrics> = Vec::new();
    for input in inputs {
        let data = WorkloadMetrics::from_path(&input.label, &input.path)?;
        println!(
            "  ✓ {} ({}): {}",
            input.path.display(),
            data.label,
            data.summary()
        );
        datasets.push(data);
    }

    // Run configuration comes from the first row of the first dataset
    let run_config = datasets[0].run_config();
    println!("  {}", run_config);

    // Latency chart
    println!("\n[2/3] Rendering latency chart...");
    let latency_series: Vec<BandSeries> = datasets
        .iter()
        .map(|d| BandSeries::from_metrics(d, Metric::Latency))
        .collect();
    let latency_spec = ChartSpec {
        title: "Latency vs Threads".to_string(),
        subtitle: run_config.to_string(),
        x_label: "Number of Threads".to_string(),
        y_label: "Latency [ms]".to_string(),
        marker: Marker::Circle,
        clip: config.latency_clip,
    };
    render_chart(
        &latency_series,
        &latency_spec,
        config,
        &config.latency_output,
    )?;
    println!("  ✓ Wrote {}", config.latency_output);

    // Throughput chart
    println!("\n[3/3] Rendering throughput chart...");
    let throughput_series: Vec<BandSeries> = datasets
        .iter()
        .map(|d| BandSeries::from_metrics(d, Metric::Throughput))
        .collect();
    let throughput_spec = ChartSpec {
        title: "Throughput vs Threads".to_string(),
        subtitle: run_config.to_string(),
        x_label: "Number of Threads".to_string(),
        y_label: "Throughput [op/s]".to_string(),
        marker: Marker::Square,
        clip: config.throughput_clip,
    };
    render_chart(
        &throughput_series,
        &throughput_spec,
        config,
        &config.throughput_output,
    )?;
    println!("  ✓ Wrote {}", config.throughput_output);

    Ok(vec![
        config.latency_output.clone(),
        config.throughput_output.clone(),
    ])
}

//! Benchmark CSV loading
//!
//! Each input file is a table of per-thread-count measurements: mean latency
//! and throughput with their standard deviations, plus the run configuration
//! (number of measured runs and warmup runs) repeated on every row.

use super::error::{PlotError, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row of a workload metrics CSV
///
/// Column aliases accept the unit-suffixed headers some benchmark harnesses
/// emit (`latency[ms]`, `throughput[op/s]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsRow {
    /// Number of worker threads for this measurement
    pub threads: u32,

    /// Mean latency in milliseconds
    #[serde(alias = "latency[ms]")]
    pub latency: f64,

    /// Standard deviation of the latency across runs
    pub latency_std: f64,

    /// Mean throughput in operations per second
    #[serde(alias = "throughput[op/s]")]
    pub throughput: f64,

    /// Standard deviation of the throughput across runs
    pub throughput_std: f64,

    /// Number of measured runs per point
    pub runs: u32,

    /// Number of warmup runs per point (not measured)
    pub runs_warmup: u32,
}

/// A labeled, parsed benchmark dataset
#[derive(Debug, Clone)]
pub struct WorkloadMetrics {
    /// Short label used in legend entries ("metrics", "local", ...)
    pub label: String,
    pub rows: Vec<MetricsRow>,
}

impl WorkloadMetrics {
    /// Parse a metrics CSV from any reader
    pub fn from_reader<R: Read>(label: impl Into<String>, reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.deserialize() {
            let row: MetricsRow = result?;
            rows.push(row);
        }

        let label = label.into();
        if rows.is_empty() {
            return Err(PlotError::Empty(format!("dataset '{}' has no rows", label)));
        }

        Ok(WorkloadMetrics { label, rows })
    }

    /// Load a metrics CSV from a file path
    pub fn from_path(label: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(label, file)
    }

    /// Run configuration from the first row
    ///
    /// Benchmark harnesses repeat the configuration on every row; by
    /// convention the first row of the first dataset is authoritative.
    pub fn run_config(&self) -> RunConfig {
        let first = &self.rows[0];
        RunConfig {
            runs: first.runs,
            warmup: first.runs_warmup,
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> DataSummary {
        let threads: Vec<u32> = self.rows.iter().map(|r| r.threads).collect();

        DataSummary {
            total_rows: self.rows.len(),
            threads_min: threads.iter().copied().min().unwrap_or(0),
            threads_max: threads.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Benchmark run configuration, shown in the chart subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub runs: u32,
    pub warmup: u32,
}

impl std::fmt::Display for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Benchmark Configuration: Runs={}, Warmup={}",
            self.runs, self.warmup
        )
    }
}

/// Summary statistics for a dataset
#[derive(Debug, Clone)]
pub struct DataSummary {
    pub total_rows: usize,
    pub threads_min: u32,
    pub threads_max: u32,
}

impl std::fmt::Display for DataSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DataSummary {{ rows: {}, threads: [{}, {}] }}",
            self.total_rows, self.threads_min, self.threads_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
threads,latency,latency_std,throughput,throughput_std,runs,runs_warmup
1,12.5,0.8,80.0,4.0,10,3
2,13.1,1.1,152.0,6.5,10,3
4,15.7,2.0,254.0,12.0,10,3
";

    const SAMPLE_CSV_UNIT_HEADERS: &str = "\
threads,latency[ms],latency_std,throughput[op/s],throughput_std,runs,runs_warmup
1,12.5,0.8,80.0,4.0,10,3
";

    #[test]
    fn test_parse_sample_csv() {
        let data = WorkloadMetrics::from_reader("metrics", SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(data.label, "metrics");
        assert_eq!(data.rows.len(), 3);

        // Values must match the CSV exactly, no transformation on load
        assert_eq!(data.rows[0].threads, 1);
        assert_eq!(data.rows[0].latency, 12.5);
        assert_eq!(data.rows[0].latency_std, 0.8);
        assert_eq!(data.rows[2].throughput, 254.0);
        assert_eq!(data.rows[2].throughput_std, 12.0);
    }

    #[test]
    fn test_parse_unit_suffixed_headers() {
        let data =
            WorkloadMetrics::from_reader("local", SAMPLE_CSV_UNIT_HEADERS.as_bytes()).unwrap();
        assert_eq!(data.rows[0].latency, 12.5);
        assert_eq!(data.rows[0].throughput, 80.0);
    }

    #[test]
    fn test_run_config_from_first_row() {
        let data = WorkloadMetrics::from_reader("metrics", SAMPLE_CSV.as_bytes()).unwrap();
        let config = data.run_config();
        assert_eq!(config.runs, 10);
        assert_eq!(config.warmup, 3);
        assert_eq!(
            config.to_string(),
            "Benchmark Configuration: Runs=10, Warmup=3"
        );
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let header_only = "threads,latency,latency_std,throughput,throughput_std,runs,runs_warmup\n";
        let result = WorkloadMetrics::from_reader("metrics", header_only.as_bytes());
        assert!(matches!(result, Err(PlotError::Empty(_))));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let bad = "threads,latency\n1,12.5\n";
        let result = WorkloadMetrics::from_reader("metrics", bad.as_bytes());
        assert!(matches!(result, Err(PlotError::Csv(_))));
    }

    #[test]
    fn test_summary() {
        let data = WorkloadMetrics::from_reader("metrics", SAMPLE_CSV.as_bytes()).unwrap();
        let summary = data.summary();
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.threads_min, 1);
        assert_eq!(summary.threads_max, 4);
        assert_eq!(
            summary.to_string(),
            "DataSummary { rows: 3, threads: [1, 4] }"
        );
    }
}

//! Benchmark metrics domain module
//!
//! Structure:
//! - `data.rs`: CSV row and dataset types
//! - `series.rs`: band series extraction and bounds
//! - `error.rs`: error types

pub mod data;
pub mod error;
pub mod series;

// Re-exports for convenience
pub use data::{DataSummary, MetricsRow, RunConfig, WorkloadMetrics};
pub use error::{PlotError, Result};
pub use series::{BandClip, BandPoint, BandSeries, Metric};

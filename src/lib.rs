//! Workload Plot Library
//!
//! Reads benchmark CSV files (latency and throughput vs. thread count) and
//! renders annotated line charts with shaded standard-deviation bands.

pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod render;

//! Chart rendering module
//!
//! Structure:
//! - `chart.rs`: line + band chart drawing
//! - `palette.rs`: categorical series colors

pub mod chart;
pub mod palette;

pub use chart::{render_chart, ChartSpec, Marker};

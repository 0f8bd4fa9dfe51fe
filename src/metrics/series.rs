//! Band series extraction
//!
//! A chart series is the (threads, mean, std) triple for one metric of one
//! dataset. The shaded band spans mean − std to mean + std; for metrics that
//! cannot be negative the lower bound is clipped at zero.

use super::data::WorkloadMetrics;

/// Which metric column to extract from a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Latency,
    Throughput,
}

impl Metric {
    /// Metric name as it appears in legend entries
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Latency => "Latency",
            Metric::Throughput => "Throughput",
        }
    }
}

/// How to treat a band lower bound that goes below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandClip {
    /// Keep mean − std as-is, even if negative
    #[default]
    None,
    /// Clamp the lower bound at zero
    AtZero,
}

/// One point of a band series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub x: f64,
    pub mean: f64,
    pub std: f64,
}

impl BandPoint {
    /// Band bounds (lower, upper) under the given clip policy
    pub fn bounds(&self, clip: BandClip) -> (f64, f64) {
        let lower = match clip {
            BandClip::None => self.mean - self.std,
            BandClip::AtZero => (self.mean - self.std).max(0.0),
        };
        (lower, self.mean + self.std)
    }
}

/// The (x, mean, std) series for one metric of one labeled dataset
#[derive(Debug, Clone)]
pub struct BandSeries {
    /// Legend entry, "Latency (metrics)" style
    pub legend_label: String,
    pub points: Vec<BandPoint>,
}

impl BandSeries {
    /// Extract a metric series from a dataset
    ///
    /// Values are copied from the parsed rows without transformation.
    pub fn from_metrics(data: &WorkloadMetrics, metric: Metric) -> Self {
        let points = data
            .rows
            .iter()
            .map(|row| {
                let (mean, std) = match metric {
                    Metric::Latency => (row.latency, row.latency_std),
                    Metric::Throughput => (row.throughput, row.throughput_std),
                };
                BandPoint {
                    x: row.threads as f64,
                    mean,
                    std,
                }
            })
            .collect();

        BandSeries {
            legend_label: format!("{} ({})", metric.name(), data.label),
            points,
        }
    }

    /// Axis extent of this series including the band, (x_min, x_max, y_min, y_max)
    pub fn extent(&self, clip: BandClip) -> (f64, f64, f64, f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for point in &self.points {
            let (lower, upper) = point.bounds(clip);
            x_min = x_min.min(point.x);
            x_max = x_max.max(point.x);
            y_min = y_min.min(lower);
            y_max = y_max.max(upper);
        }

        (x_min, x_max, y_min, y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::WorkloadMetrics;

    const SAMPLE_CSV: &str = "\
threads,latency,latency_std,throughput,throughput_std,runs,runs_warmup
1,12.5,0.8,80.0,4.0,10,3
2,0.5,1.2,152.0,6.5,10,3
";

    fn sample() -> WorkloadMetrics {
        WorkloadMetrics::from_reader("metrics", SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_latency_series_matches_csv() {
        let series = BandSeries::from_metrics(&sample(), Metric::Latency);
        assert_eq!(series.legend_label, "Latency (metrics)");
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].x, 1.0);
        assert_eq!(series.points[0].mean, 12.5);
        assert_eq!(series.points[0].std, 0.8);
    }

    #[test]
    fn test_throughput_series_matches_csv() {
        let series = BandSeries::from_metrics(&sample(), Metric::Throughput);
        assert_eq!(series.legend_label, "Throughput (metrics)");
        assert_eq!(series.points[1].mean, 152.0);
        assert_eq!(series.points[1].std, 6.5);
    }

    #[test]
    fn test_band_bounds_unclipped() {
        let point = BandPoint {
            x: 2.0,
            mean: 0.5,
            std: 1.2,
        };
        let (lower, upper) = point.bounds(BandClip::None);
        assert!((lower - (-0.7)).abs() < 1e-12);
        assert!((upper - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_band_bounds_clipped_at_zero() {
        let point = BandPoint {
            x: 2.0,
            mean: 0.5,
            std: 1.2,
        };
        let (lower, upper) = point.bounds(BandClip::AtZero);
        assert_eq!(lower, 0.0);
        assert!((upper - 1.7).abs() < 1e-12);

        // Clip only applies when the bound is actually negative
        let positive = BandPoint {
            x: 1.0,
            mean: 12.5,
            std: 0.8,
        };
        let (lower, _) = positive.bounds(BandClip::AtZero);
        assert!((lower - 11.7).abs() < 1e-12);
    }

    #[test]
    fn test_extent_includes_band() {
        let series = BandSeries::from_metrics(&sample(), Metric::Latency);
        let (x_min, x_max, y_min, y_max) = series.extent(BandClip::None);
        assert_eq!(x_min, 1.0);
        assert_eq!(x_max, 2.0);
        assert!((y_min - (-0.7)).abs() < 1e-12);
        assert!((y_max - 13.3).abs() < 1e-12);

        let (_, _, y_min_clipped, _) = series.extent(BandClip::AtZero);
        assert_eq!(y_min_clipped, 0.0);
    }
}

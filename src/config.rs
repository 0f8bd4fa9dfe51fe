//! Plot configuration
//!
//! Figure geometry and styling defaults for both charts. There are no CLI
//! flags or environment variables; callers construct a config (usually
//! `PlotConfig::default()`) and hand it to the pipeline.

use crate::metrics::BandClip;

/// Plot dimension - either explicit pixels or "auto" (use the built-in default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotDimension {
    #[default]
    Auto,
    Pixels(u32),
}

impl PlotDimension {
    /// Parse from a string value
    ///
    /// Valid formats:
    /// - "auto" or "" (empty) → Auto
    /// - "1500" → Pixels(1500) if in valid range [100, 10000]
    pub fn parse(value: &str, default: PlotDimension) -> Self {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return PlotDimension::Auto;
        }

        match trimmed.parse::<u32>() {
            Ok(px) if (100..=10_000).contains(&px) => PlotDimension::Pixels(px),
            Ok(px) => {
                eprintln!(
                    "⚠ Plot dimension {} out of valid range [100-10000], using default: {:?}",
                    px, default
                );
                default
            }
            Err(_) => {
                eprintln!(
                    "⚠ Invalid plot dimension '{}', using default: {:?}",
                    trimmed, default
                );
                default
            }
        }
    }

    /// Resolve to actual pixels, with `base` as the Auto size
    pub fn resolve(&self, base: u32) -> u32 {
        match self {
            PlotDimension::Pixels(px) => *px,
            PlotDimension::Auto => base,
        }
    }
}

/// Configuration for chart rendering
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Figure width (pixels or Auto → 1000)
    pub width: PlotDimension,

    /// Figure height (pixels or Auto → 600)
    pub height: PlotDimension,

    /// Opacity of the standard-deviation band, in [0, 1]
    pub band_alpha: f64,

    /// Marker radius in pixels
    pub marker_size: u32,

    /// Lower-bound clip policy for the latency band
    pub latency_clip: BandClip,

    /// Lower-bound clip policy for the throughput band
    pub throughput_clip: BandClip,

    /// Output file for the latency chart
    pub latency_output: String,

    /// Output file for the throughput chart
    pub throughput_output: String,
}

/// Auto width, the original's 10 in × 100 dpi
const BASE_WIDTH: u32 = 1000;
/// Auto height, the original's 6 in × 100 dpi
const BASE_HEIGHT: u32 = 600;

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: PlotDimension::Auto,
            height: PlotDimension::Auto,
            band_alpha: 0.2,
            marker_size: 4,
            latency_clip: BandClip::AtZero,
            throughput_clip: BandClip::None,
            latency_output: "latency_plot.svg".to_string(),
            throughput_output: "throughput_plot.svg".to_string(),
        }
    }
}

impl PlotConfig {
    /// Resolve figure dimensions to actual pixels, (width, height)
    pub fn resolve_dimensions(&self) -> (u32, u32) {
        (
            self.width.resolve(BASE_WIDTH),
            self.height.resolve(BASE_HEIGHT),
        )
    }
}

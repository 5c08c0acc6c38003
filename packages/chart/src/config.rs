//! Chart configuration, loaded from TOML.
//!
//! A default configuration (NYC 311 noise complaints over five
//! neighborhoods) is baked into the binary at compile time; deployments
//! can substitute their own TOML via [`ChartConfig::from_toml_str`].

use noise_chart_chart_models::Neighborhood;
use noise_chart_source_models::DatasetConfig;
use serde::Deserialize;

use crate::ChartError;

/// Default configuration embedded at compile time.
const DEFAULT_TOML: &str = include_str!("../chart.toml");

/// Complete configuration for one chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    /// Chart title, without the date-range suffix.
    pub title: String,
    /// Socrata dataset to query.
    pub dataset: DatasetConfig,
    /// Ordered ZIP whitelist with display names. Records outside this
    /// list are dropped by the filter; the x-axis domain is exactly this
    /// list, in this order.
    pub neighborhoods: Vec<Neighborhood>,
    /// Canvas dimensions and margins.
    pub layout: Layout,
    /// Palette and reserved-descriptor legend settings.
    pub legend: LegendConfig,
}

/// Canvas dimensions, margins, and band padding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layout {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Padding fraction for the band scale.
    pub band_padding: f64,
    /// Margins around the plot area.
    pub margin: Margins,
}

/// Pixel margins around the plot area.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Margins {
    /// Top margin (title space).
    pub top: f64,
    /// Right margin (legend space).
    pub right: f64,
    /// Bottom margin (axis label space).
    pub bottom: f64,
    /// Left margin (axis space).
    pub left: f64,
}

/// Legend palette and the reserved descriptor override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegendConfig {
    /// Hex colors assigned to descriptors in stack order, cycling when
    /// there are more descriptors than colors. Must be non-empty.
    pub palette: Vec<String>,
    /// Descriptor that always takes the pattern instead of a color.
    pub reserved_descriptor: String,
    /// Pattern name assigned to the reserved descriptor.
    pub reserved_pattern: String,
}

impl ChartConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError`] if the TOML is malformed or the palette is
    /// empty.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ChartError> {
        let config: Self = toml::de::from_str(toml_str)?;
        if config.legend.palette.is_empty() {
            return Err(ChartError::InvalidConfig {
                message: "legend palette must not be empty".to_string(),
            });
        }
        Ok(config)
    }

    /// Returns the embedded default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError`] if the embedded TOML fails to parse; this
    /// indicates a packaging defect, not a runtime condition.
    pub fn embedded() -> Result<Self, ChartError> {
        Self::from_toml_str(DEFAULT_TOML)
    }
}

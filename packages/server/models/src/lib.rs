#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the noise chart server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the pipeline types to allow independent evolution of the API
//! contract.

use noise_chart_chart_models::{
    BandScale, ChartData, LegendEntry, LinearScale, Neighborhood, StackInterval,
};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is up.
    pub healthy: bool,
    /// Crate version string.
    pub version: String,
}

/// The chart render tuple as returned by the API.
///
/// Everything the frontend renderer needs to draw bars, axes, labels,
/// legend, and title without recomputing any aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChart {
    /// Composed chart title including the date range.
    pub title: String,
    /// Long-form window start label.
    pub window_start: String,
    /// Long-form window end label.
    pub window_end: String,
    /// Whitelisted neighborhoods in axis order.
    pub neighborhoods: Vec<Neighborhood>,
    /// Distinct descriptors in stack order.
    pub descriptors: Vec<String>,
    /// Stacked-bar segments grouped by ZIP.
    pub intervals: Vec<StackInterval>,
    /// Horizontal (ZIP) scale, with the derived band geometry.
    pub x_scale: ApiBandScale,
    /// Vertical (count) scale.
    pub y_scale: LinearScale,
    /// Descriptor→visual-key legend mapping in stack order.
    pub legend: Vec<LegendEntry>,
}

/// Band scale plus its derived step and bandwidth, so the renderer does
/// not reimplement the band arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBandScale {
    /// Ordered band domain (the full ZIP whitelist).
    pub domain: Vec<String>,
    /// Horizontal pixel range `(left, right)`.
    pub range: (f64, f64),
    /// Padding fraction between and around bands.
    pub padding: f64,
    /// Distance between consecutive band starts.
    pub step: f64,
    /// Width of one band.
    pub bandwidth: f64,
}

impl From<BandScale> for ApiBandScale {
    fn from(scale: BandScale) -> Self {
        let step = scale.step();
        let bandwidth = scale.bandwidth();
        Self {
            domain: scale.domain,
            range: scale.range,
            padding: scale.padding,
            step,
            bandwidth,
        }
    }
}

impl From<ChartData> for ApiChart {
    fn from(chart: ChartData) -> Self {
        Self {
            title: chart.title,
            window_start: chart.window_start,
            window_end: chart.window_end,
            neighborhoods: chart.neighborhoods,
            descriptors: chart.descriptors,
            intervals: chart.intervals,
            x_scale: chart.x_scale.into(),
            y_scale: chart.y_scale,
            legend: chart.legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_conversion_precomputes_geometry() {
        let scale = BandScale::new(
            vec!["10016".to_string(), "10014".to_string()],
            (60.0, 550.0),
            0.2,
        );
        let expected_step = scale.step();
        let api: ApiBandScale = scale.into();
        assert!((api.step - expected_step).abs() < f64::EPSILON);
        assert!((api.bandwidth - expected_step * 0.8).abs() < 1e-9);
    }

    #[test]
    fn chart_serializes_camel_case() {
        let chart = ApiChart {
            title: "Test".to_string(),
            window_start: "June 15, 2023".to_string(),
            window_end: "June 15, 2024".to_string(),
            neighborhoods: Vec::new(),
            descriptors: Vec::new(),
            intervals: Vec::new(),
            x_scale: BandScale::new(Vec::new(), (0.0, 100.0), 0.2).into(),
            y_scale: LinearScale::new(0, (450.0, 100.0)),
            legend: Vec::new(),
        };
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"windowStart\""));
        assert!(json.contains("\"xScale\""));
        assert!(json.contains("\"domainMax\""));
    }
}

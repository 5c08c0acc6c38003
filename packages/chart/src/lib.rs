#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Complaint filtering, aggregation, and stacked-bar chart computation.
//!
//! The pipeline runs leaf to root: query window → fetch → [`filter`] →
//! [`aggregate`] → [`stack`] → [`scale`] → [`legend`], assembled by
//! [`pipeline::run_pipeline`] into the render tuple a stacked-bar renderer
//! consumes. Every stage is a pure function over owned data; re-running
//! the pipeline recomputes everything from a fresh fetch.

pub mod aggregate;
pub mod config;
pub mod filter;
pub mod legend;
pub mod pipeline;
pub mod scale;
pub mod stack;

use noise_chart_source::SourceError;

/// Errors that can occur while producing chart data.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Fetching complaint records failed. Fatal to the run: no partial
    /// or silently empty chart is produced.
    #[error("Fetch failed: {0}")]
    Source(#[from] SourceError),

    /// The chart configuration TOML is malformed.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// The chart configuration parsed but is unusable.
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Description of what is wrong.
        message: String,
    },
}

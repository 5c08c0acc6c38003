#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Complaint data fetching.
//!
//! Defines the [`ComplaintSource`] capability trait and the production
//! Socrata implementation. The fetch happens exactly once per pipeline
//! run; a failed or timed-out request fails the whole run rather than
//! producing a partial chart.

pub mod socrata;
pub mod window;

use async_trait::async_trait;
use noise_chart_source_models::ComplaintRecord;

use crate::window::QueryWindow;

/// Errors that can occur while fetching complaint data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed (connection, timeout, transport).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server responded with a non-success status code.
    #[error("HTTP status {status} from {url}")]
    Status {
        /// Status code returned by the server.
        status: u16,
        /// URL the request was sent to.
        url: String,
    },

    /// The response body could not be parsed as a JSON record array.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Capability for fetching complaint records over a query window.
///
/// The pipeline depends on this trait rather than on a concrete HTTP
/// client, so tests can substitute a canned source.
#[async_trait]
pub trait ComplaintSource: Send + Sync {
    /// Returns a unique identifier for this source (e.g. `"nyc_311"`).
    fn id(&self) -> &str;

    /// Fetches all complaint records created within `window`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request or response decoding fails.
    async fn fetch(&self, window: &QueryWindow) -> Result<Vec<ComplaintRecord>, SourceError>;
}

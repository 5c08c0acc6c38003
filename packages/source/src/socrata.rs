//! Socrata SODA API fetcher for 311 complaint data.
//!
//! Builds a SoQL `$query` that filters by complaint category keyword and
//! creation-date window, then performs a single GET against the dataset.
//! NYC's 311 service requests dataset:
//! <https://data.cityofnewyork.us/resource/erm2-nwe9.json>

use std::time::Duration;

use async_trait::async_trait;
use noise_chart_source_models::{ComplaintRecord, DatasetConfig};

use crate::window::QueryWindow;
use crate::{ComplaintSource, SourceError};

/// Fetches complaints from a Socrata dataset.
pub struct SocrataSource {
    client: reqwest::Client,
    dataset: DatasetConfig,
}

impl SocrataSource {
    /// Creates a source for `dataset` with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP client cannot be constructed.
    pub fn new(dataset: DatasetConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(dataset.timeout_secs))
            .build()?;
        Ok(Self { client, dataset })
    }
}

/// Builds the SoQL `$query` string for one window.
///
/// The category match is case-insensitive: the column is lowered on the
/// server and the keyword is lowered here.
#[must_use]
pub fn build_query(dataset: &DatasetConfig, window: &QueryWindow) -> String {
    format!(
        "SELECT * WHERE LOWER({}) LIKE '%{}%' AND {} BETWEEN '{}' AND '{}'",
        dataset.category_column,
        dataset.category_keyword.to_lowercase(),
        dataset.date_column,
        window.query_start(),
        window.query_end(),
    )
}

#[async_trait]
impl ComplaintSource for SocrataSource {
    fn id(&self) -> &'static str {
        "nyc_311"
    }

    async fn fetch(&self, window: &QueryWindow) -> Result<Vec<ComplaintRecord>, SourceError> {
        let query = build_query(&self.dataset, window);
        log::info!(
            "Fetching complaints from {} for {} - {}",
            self.dataset.api_url,
            window.query_start(),
            window.query_end(),
        );

        let response = self
            .client
            .get(&self.dataset.api_url)
            .query(&[("$query", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.dataset.api_url.clone(),
            });
        }

        // Read the body as text first so a truncated or garbled response
        // surfaces as a JSON error with the real payload behind it.
        let body = response.text().await?;
        let records: Vec<ComplaintRecord> = serde_json::from_str(&body)?;

        log::info!("Downloaded {} complaint records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use chrono::Utc;

    use super::*;

    fn dataset() -> DatasetConfig {
        DatasetConfig {
            api_url: "https://data.cityofnewyork.us/resource/erm2-nwe9.json".to_string(),
            category_column: "complaint_type".to_string(),
            category_keyword: "noise".to_string(),
            date_column: "created_date".to_string(),
            timeout_secs: 30,
        }
    }

    fn window() -> QueryWindow {
        QueryWindow::ending_at(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn query_filters_category_and_window() {
        let query = build_query(&dataset(), &window());
        assert_eq!(
            query,
            "SELECT * WHERE LOWER(complaint_type) LIKE '%noise%' \
             AND created_date BETWEEN '2023-06-15T00:00:00.000' \
             AND '2024-06-15T23:59:59.999'",
        );
    }

    #[test]
    fn keyword_is_lowered() {
        let mut config = dataset();
        config.category_keyword = "Noise".to_string();
        let query = build_query(&config, &window());
        assert!(query.contains("LIKE '%noise%'"));
    }
}

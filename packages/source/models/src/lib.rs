#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw 311 complaint record and dataset configuration types.
//!
//! The record schema is owned by the city's open-data portal, not by this
//! system, so every field is optional and deserialization never fails on
//! missing or extra fields.

use serde::{Deserialize, Serialize};

/// A single 311 complaint as returned by the Socrata API.
///
/// Only the fields the pipeline reads are listed; anything else in the
/// response is ignored. All fields are defensively optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Unique complaint identifier assigned by the portal.
    #[serde(default)]
    pub unique_key: Option<String>,
    /// When the complaint was created (Socrata floating timestamp).
    #[serde(default)]
    pub created_date: Option<String>,
    /// Top-level complaint category (e.g. "Noise - Residential").
    #[serde(default)]
    pub complaint_type: Option<String>,
    /// Complaint sub-category (e.g. "Loud Music/Party").
    #[serde(default)]
    pub descriptor: Option<String>,
    /// ZIP code where the incident occurred.
    #[serde(default)]
    pub incident_zip: Option<String>,
    /// City name as reported by the portal.
    #[serde(default)]
    pub city: Option<String>,
    /// Borough name as reported by the portal.
    #[serde(default)]
    pub borough: Option<String>,
}

/// Configuration for the Socrata dataset to query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Base API URL (e.g. `"https://data.cityofnewyork.us/resource/erm2-nwe9.json"`).
    pub api_url: String,
    /// Column holding the complaint category, matched case-insensitively.
    pub category_column: String,
    /// Substring the category column must contain (e.g. `"noise"`).
    pub category_keyword: String,
    /// Column holding the creation timestamp, used for the window filter.
    pub date_column: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_record_with_missing_fields() {
        let record: ComplaintRecord =
            serde_json::from_str(r#"{"incident_zip": "10016"}"#).unwrap();
        assert_eq!(record.incident_zip.as_deref(), Some("10016"));
        assert!(record.descriptor.is_none());
        assert!(record.created_date.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let record: ComplaintRecord = serde_json::from_str(
            r#"{"descriptor": "Banging", "agency": "NYPD", "x_coordinate": "998"}"#,
        )
        .unwrap();
        assert_eq!(record.descriptor.as_deref(), Some("Banging"));
    }

    #[test]
    fn timeout_defaults_when_absent() {
        let config: DatasetConfig = serde_json::from_str(
            r#"{
                "api_url": "https://example.test/resource/abcd.json",
                "category_column": "complaint_type",
                "category_keyword": "noise",
                "date_column": "created_date"
            }"#,
        )
        .unwrap();
        assert_eq!(config.timeout_secs, 30);
    }
}

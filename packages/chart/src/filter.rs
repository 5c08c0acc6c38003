//! Record filtering against the neighborhood whitelist.

use noise_chart_chart_models::Neighborhood;
use noise_chart_source_models::ComplaintRecord;

/// Keeps only records inside whitelisted ZIPs that carry a descriptor.
///
/// Records failing either predicate are silently dropped — deliberate
/// data cleaning, not a fault. Input order is preserved.
#[must_use]
pub fn filter_records(
    records: Vec<ComplaintRecord>,
    neighborhoods: &[Neighborhood],
) -> Vec<ComplaintRecord> {
    records
        .into_iter()
        .filter(|record| {
            let zip_listed = record
                .incident_zip
                .as_deref()
                .is_some_and(|zip| neighborhoods.iter().any(|n| n.zip == zip));
            let has_descriptor = record
                .descriptor
                .as_deref()
                .is_some_and(|descriptor| !descriptor.is_empty());
            zip_listed && has_descriptor
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighborhoods() -> Vec<Neighborhood> {
        vec![
            Neighborhood {
                zip: "10016".to_string(),
                name: "Murray Hill (10016)".to_string(),
            },
            Neighborhood {
                zip: "11211".to_string(),
                name: "Williamsburg (11211)".to_string(),
            },
        ]
    }

    fn record(zip: Option<&str>, descriptor: Option<&str>) -> ComplaintRecord {
        ComplaintRecord {
            unique_key: None,
            created_date: None,
            complaint_type: Some("Noise - Residential".to_string()),
            descriptor: descriptor.map(str::to_string),
            incident_zip: zip.map(str::to_string),
            city: None,
            borough: None,
        }
    }

    #[test]
    fn drops_unlisted_zips() {
        let filtered = filter_records(
            vec![
                record(Some("10016"), Some("Banging")),
                record(Some("99999"), Some("Banging")),
            ],
            &neighborhoods(),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].incident_zip.as_deref(), Some("10016"));
    }

    #[test]
    fn drops_missing_or_empty_descriptor() {
        let filtered = filter_records(
            vec![
                record(Some("10016"), None),
                record(Some("10016"), Some("")),
                record(Some("10016"), Some("Loud Talking")),
            ],
            &neighborhoods(),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].descriptor.as_deref(), Some("Loud Talking"));
    }

    #[test]
    fn drops_records_without_zip() {
        let filtered = filter_records(vec![record(None, Some("Banging"))], &neighborhoods());
        assert!(filtered.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let filtered = filter_records(
            vec![
                record(Some("11211"), Some("Banging")),
                record(Some("10016"), Some("Loud Talking")),
                record(Some("11211"), Some("Loud Music/Party")),
            ],
            &neighborhoods(),
        );
        let zips: Vec<_> = filtered
            .iter()
            .filter_map(|r| r.incident_zip.as_deref())
            .collect();
        assert_eq!(zips, vec!["11211", "10016", "11211"]);
    }
}

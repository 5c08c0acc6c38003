//! Two-level grouping of filtered records: ZIP, then descriptor.

use noise_chart_chart_models::{AggregationRow, DescriptorCount};
use noise_chart_source_models::ComplaintRecord;

/// Result of aggregating one filtered record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// One row per ZIP present in the input, in order of first
    /// appearance. ZIPs with no records produce no row.
    pub rows: Vec<AggregationRow>,
    /// Distinct descriptors in order of first appearance across the
    /// whole input. This is the stack order and the legend order.
    pub descriptors: Vec<String>,
}

/// Folds filtered records into per-ZIP descriptor counts.
///
/// Records lacking a ZIP or descriptor were already dropped by the
/// filter; they are skipped here rather than counted.
#[must_use]
pub fn aggregate(records: &[ComplaintRecord]) -> Aggregation {
    let mut rows: Vec<AggregationRow> = Vec::new();
    let mut descriptors: Vec<String> = Vec::new();

    for record in records {
        let (Some(zip), Some(descriptor)) =
            (record.incident_zip.as_deref(), record.descriptor.as_deref())
        else {
            continue;
        };

        if !descriptors.iter().any(|d| d == descriptor) {
            descriptors.push(descriptor.to_string());
        }

        let index = match rows.iter().position(|row| row.zip == zip) {
            Some(index) => index,
            None => {
                rows.push(AggregationRow {
                    zip: zip.to_string(),
                    counts: Vec::new(),
                });
                rows.len() - 1
            }
        };

        let row = &mut rows[index];
        match row
            .counts
            .iter()
            .position(|count| count.descriptor == descriptor)
        {
            Some(slot) => row.counts[slot].count += 1,
            None => row.counts.push(DescriptorCount {
                descriptor: descriptor.to_string(),
                count: 1,
            }),
        }
    }

    Aggregation { rows, descriptors }
}

//! Pivoting aggregation rows into cumulative stack intervals.

use noise_chart_chart_models::{AggregationRow, StackInterval};

/// Builds stacked-bar segments from aggregation rows.
///
/// For each row the ordered descriptor list is walked with a running
/// cumulative total, emitting one interval per descriptor — count 0 when
/// the row lacks that descriptor. Per ZIP the intervals partition
/// `[0, rowTotal]` with no gaps.
#[must_use]
pub fn build_stack(rows: &[AggregationRow], descriptors: &[String]) -> Vec<StackInterval> {
    let mut intervals = Vec::with_capacity(rows.len() * descriptors.len());

    for row in rows {
        let mut cumulative = 0;
        for descriptor in descriptors {
            let count = row.count_for(descriptor);
            intervals.push(StackInterval {
                zip: row.zip.clone(),
                descriptor: descriptor.clone(),
                lower: cumulative,
                upper: cumulative + count,
            });
            cumulative += count;
        }
    }

    intervals
}

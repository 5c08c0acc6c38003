//! The end-to-end chart pipeline.
//!
//! One fetch, then purely synchronous in-memory transformation. All
//! intermediate structures are owned by the run; the caller owns
//! scheduling and re-invocation.

use chrono::{DateTime, Utc};
use noise_chart_chart_models::ChartData;
use noise_chart_source::window::QueryWindow;
use noise_chart_source::ComplaintSource;

use crate::aggregate::aggregate;
use crate::config::ChartConfig;
use crate::filter::filter_records;
use crate::legend::assign_legend;
use crate::scale::{band_scale, linear_scale};
use crate::stack::build_stack;
use crate::ChartError;

/// Runs the full pipeline for the year ending at `now`.
///
/// Zero filtered records is not an error: the result is a valid empty
/// chart state (full axis domain, no intervals, empty legend).
///
/// # Errors
///
/// Returns [`ChartError`] if the fetch fails; no partial chart is
/// produced.
pub async fn run_pipeline(
    now: DateTime<Utc>,
    source: &dyn ComplaintSource,
    config: &ChartConfig,
) -> Result<ChartData, ChartError> {
    let window = QueryWindow::ending_at(now);
    let records = source.fetch(&window).await?;
    log::info!(
        "Fetched {} raw records from source {}",
        records.len(),
        source.id(),
    );

    let filtered = filter_records(records, &config.neighborhoods);
    if filtered.is_empty() {
        log::warn!("No complaints matched the whitelist this period; chart will be empty");
    } else {
        log::info!("{} records after whitelist filtering", filtered.len());
    }

    let aggregation = aggregate(&filtered);
    let intervals = build_stack(&aggregation.rows, &aggregation.descriptors);
    let x_scale = band_scale(&config.neighborhoods, &config.layout);
    let y_scale = linear_scale(&intervals, &config.neighborhoods, &config.layout);
    let legend = assign_legend(&aggregation.descriptors, &config.legend);

    Ok(ChartData {
        title: format!(
            "{} ({} - {})",
            config.title,
            window.start_label(),
            window.end_label(),
        ),
        window_start: window.start_label(),
        window_end: window.end_label(),
        neighborhoods: config.neighborhoods.clone(),
        descriptors: aggregation.descriptors,
        intervals,
        x_scale,
        y_scale,
        legend,
    })
}

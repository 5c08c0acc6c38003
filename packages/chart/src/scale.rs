//! Axis scale derivation from stacked data and layout.

use noise_chart_chart_models::{BandScale, LinearScale, Neighborhood, StackInterval};

use crate::config::Layout;

/// Categorical x-scale over the full ZIP whitelist.
///
/// The domain is the whitelist — including ZIPs with zero complaints —
/// so the axis stays stable when a neighborhood goes quiet for a period.
#[must_use]
pub fn band_scale(neighborhoods: &[Neighborhood], layout: &Layout) -> BandScale {
    let domain = neighborhoods.iter().map(|n| n.zip.clone()).collect();
    BandScale::new(
        domain,
        (layout.margin.left, layout.width - layout.margin.right),
        layout.band_padding,
    )
}

/// Linear y-scale over `[0, max per-ZIP total]`.
///
/// ZIPs absent from the intervals contribute a total of 0. The range is
/// inverted so counts grow upward on screen.
#[must_use]
pub fn linear_scale(
    intervals: &[StackInterval],
    neighborhoods: &[Neighborhood],
    layout: &Layout,
) -> LinearScale {
    let domain_max = neighborhoods
        .iter()
        .map(|n| zip_total(intervals, &n.zip))
        .max()
        .unwrap_or(0);
    LinearScale::new(
        domain_max,
        (layout.height - layout.margin.bottom, layout.margin.top),
    )
}

/// Total complaint count for one ZIP: the topmost interval bound.
fn zip_total(intervals: &[StackInterval], zip: &str) -> u64 {
    intervals
        .iter()
        .filter(|interval| interval.zip == zip)
        .map(|interval| interval.upper)
        .max()
        .unwrap_or(0)
}

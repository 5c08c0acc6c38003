#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation, stacked-bar geometry, scale, and legend types.
//!
//! Everything a stacked-bar renderer consumes: per-ZIP descriptor counts,
//! cumulative stack intervals, the two axis scales, and the
//! descriptor→visual-key legend mapping. All types are plain data,
//! recomputed from scratch on every pipeline run and never mutated after
//! construction.

use serde::{Deserialize, Serialize};

/// A whitelisted ZIP code with its human-readable neighborhood name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    /// ZIP code (e.g. `"10016"`).
    pub zip: String,
    /// Display name (e.g. `"Murray Hill (10016)"`).
    pub name: String,
}

/// Count of complaints for a single descriptor within one ZIP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorCount {
    /// Complaint descriptor (e.g. `"Loud Music/Party"`).
    pub descriptor: String,
    /// Number of complaints.
    pub count: u64,
}

/// Per-ZIP aggregation result: one row per ZIP present in the filtered
/// data, holding counts in descriptor-first-appearance order.
///
/// ZIPs with no filtered complaints produce no row at all; the band scale
/// unifies against the full whitelist independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationRow {
    /// ZIP code this row aggregates.
    pub zip: String,
    /// Per-descriptor counts for this ZIP.
    pub counts: Vec<DescriptorCount>,
}

impl AggregationRow {
    /// Count for `descriptor`, 0 when the ZIP has no such complaints.
    #[must_use]
    pub fn count_for(&self, descriptor: &str) -> u64 {
        self.counts
            .iter()
            .find(|c| c.descriptor == descriptor)
            .map_or(0, |c| c.count)
    }

    /// Total complaints across all descriptors for this ZIP.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// One segment of a stacked bar: a descriptor's contiguous sub-range
/// within a ZIP's cumulative total.
///
/// For a fixed ZIP the intervals partition `[0, total]` with no gaps or
/// overlaps, ordered by the global descriptor order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackInterval {
    /// ZIP code the segment belongs to.
    pub zip: String,
    /// Descriptor the segment represents.
    pub descriptor: String,
    /// Cumulative count below this segment.
    pub lower: u64,
    /// Cumulative count including this segment.
    pub upper: u64,
}

impl StackInterval {
    /// Number of complaints in this segment.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.upper - self.lower
    }
}

/// Categorical scale mapping ZIP codes to equal-width horizontal bands.
///
/// Follows `d3.scaleBand` with equal inner and outer padding:
/// `step = width / (n + padding)`, `bandwidth = step * (1 - padding)`,
/// and the first band starts one padding-step into the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandScale {
    /// Ordered band domain (the full ZIP whitelist).
    pub domain: Vec<String>,
    /// Horizontal pixel range `(left, right)`.
    pub range: (f64, f64),
    /// Padding fraction between and around bands.
    pub padding: f64,
}

impl BandScale {
    /// Creates a band scale over `domain` within `range`.
    #[must_use]
    pub const fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            domain,
            range,
            padding,
        }
    }

    /// Distance between consecutive band starts.
    #[must_use]
    pub fn step(&self) -> f64 {
        let width = self.range.1 - self.range.0;
        #[allow(clippy::cast_precision_loss)]
        let slots = self.domain.len() as f64 + self.padding;
        width / slots.max(1.0)
    }

    /// Width of one band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `zip`, or `None` for unlisted ZIPs.
    #[must_use]
    pub fn position(&self, zip: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == zip)?;
        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * self.step();
        Some(self.range.0 + self.step() * self.padding + offset)
    }
}

/// Linear scale mapping complaint counts to vertical pixel positions.
///
/// The range is inverted (larger counts are higher on screen), so
/// `range.0` is the zero-count baseline and `range.1` the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearScale {
    /// Upper bound of the count domain (`[0, domain_max]`).
    pub domain_max: u64,
    /// Vertical pixel range `(bottom, top)`.
    pub range: (f64, f64),
}

impl LinearScale {
    /// Creates a linear scale over `[0, domain_max]` within `range`.
    #[must_use]
    pub const fn new(domain_max: u64, range: (f64, f64)) -> Self {
        Self { domain_max, range }
    }

    /// Pixel position for `value`.
    ///
    /// A degenerate all-zero domain maps every input to the baseline
    /// rather than producing NaN.
    #[must_use]
    pub fn position(&self, value: u64) -> f64 {
        if self.domain_max == 0 {
            return self.range.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = value as f64 / self.domain_max as f64;
        self.range.0 + fraction * (self.range.1 - self.range.0)
    }
}

/// How one descriptor is rendered: a palette color or a named fill
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum VisualKey {
    /// Solid fill with a hex color (e.g. `"#BA55D3"`).
    Color(String),
    /// Named fill pattern (e.g. `"crosshatch"`).
    Pattern(String),
}

/// One legend row: a descriptor and its assigned visual key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// Complaint descriptor.
    pub descriptor: String,
    /// Assigned color or pattern.
    pub key: VisualKey,
}

/// The complete render tuple for one pipeline run.
///
/// Holds everything the renderer needs to draw bars, axes, labels, legend,
/// and title without recomputing any aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Composed chart title including the date range.
    pub title: String,
    /// Long-form label for the window start (e.g. `"June 15, 2023"`).
    pub window_start: String,
    /// Long-form label for the window end.
    pub window_end: String,
    /// Whitelisted neighborhoods in axis order.
    pub neighborhoods: Vec<Neighborhood>,
    /// Distinct descriptors in first-appearance (stack) order.
    pub descriptors: Vec<String>,
    /// Stacked-bar segments grouped by ZIP.
    pub intervals: Vec<StackInterval>,
    /// Horizontal (ZIP) scale.
    pub x_scale: BandScale,
    /// Vertical (count) scale.
    pub y_scale: LinearScale,
    /// Descriptor→visual-key legend mapping in stack order.
    pub legend: Vec<LegendEntry>,
}

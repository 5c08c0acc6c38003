//! Rolling one-year query window.
//!
//! The chart always covers the year ending "today": the window runs from
//! the same calendar day one year ago through the end of the current day.

use chrono::{DateTime, Months, NaiveDate, Utc};

/// A closed date range covering one year, ending at a reference instant.
///
/// The query bounds extend to day boundaries: the start day begins at
/// `00:00:00.000` and the end day finishes at `23:59:59.999`, matching the
/// Socrata floating-timestamp format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl QueryWindow {
    /// Builds the window for the year ending at `now`.
    ///
    /// Pure function of the clock. Feb 29 clamps to Feb 28 of the prior
    /// year.
    #[must_use]
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        let end = now.date_naive();
        let start = end.checked_sub_months(Months::new(12)).unwrap_or(end);
        Self { start, end }
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lower query bound: midnight at the start of the first day.
    #[must_use]
    pub fn query_start(&self) -> String {
        format!("{}T00:00:00.000", self.start.format("%Y-%m-%d"))
    }

    /// Upper query bound: the last millisecond of the final day.
    #[must_use]
    pub fn query_end(&self) -> String {
        format!("{}T23:59:59.999", self.end.format("%Y-%m-%d"))
    }

    /// Long-form label for the first day (e.g. `"January 5, 2024"`).
    #[must_use]
    pub fn start_label(&self) -> String {
        self.start.format("%B %-d, %Y").to_string()
    }

    /// Long-form label for the final day.
    #[must_use]
    pub fn end_label(&self) -> String {
        self.end.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn window_spans_one_year_with_day_bounds() {
        let window = QueryWindow::ending_at(noon(2024, 6, 15));
        assert_eq!(window.query_start(), "2023-06-15T00:00:00.000");
        assert_eq!(window.query_end(), "2024-06-15T23:59:59.999");
    }

    #[test]
    fn labels_are_long_form_dates() {
        let window = QueryWindow::ending_at(noon(2024, 1, 5));
        assert_eq!(window.start_label(), "January 5, 2023");
        assert_eq!(window.end_label(), "January 5, 2024");
    }

    #[test]
    fn leap_day_clamps_to_prior_february() {
        let window = QueryWindow::ending_at(noon(2024, 2, 29));
        assert_eq!(window.query_start(), "2023-02-28T00:00:00.000");
        assert_eq!(window.query_end(), "2024-02-29T23:59:59.999");
    }

    #[test]
    fn single_digit_days_are_not_zero_padded() {
        let window = QueryWindow::ending_at(noon(2025, 3, 1));
        assert_eq!(window.end_label(), "March 1, 2025");
    }
}

//! The inclusive range of days a station request covers.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day requested (inclusive).
    pub start: NaiveDate,
    /// Last day requested, as sent in `year2/month2/day2`.
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A window covering a single fixed day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// The window ending at `now` and starting `days` days earlier.
    ///
    /// A start before the earliest representable date is clamped to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use mesonet_wind::DateWindow;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
    /// let window = DateWindow::recent_days(2, now);
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    /// ```
    pub fn recent_days(days: u32, now: DateTime<Utc>) -> Self {
        let end = now.date_naive();
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, end)
    }
}

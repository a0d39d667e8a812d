//! Reporting windows for scoping dashboard and analytics reports.

use serde::Deserialize;
use time::{Date, Duration, Month};

/// The span of calendar days a report covers.
///
/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    /// The first day of the window.
    pub start: Date,
    /// The last day of the window.
    pub end: Date,
}

impl ReportingWindow {
    /// Create a window spanning `start` to `end`, inclusive.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// The number of calendar days the window covers, never less than one.
    ///
    /// A reversed window is treated as a single day rather than an error, so
    /// average-daily-spend calculations cannot divide by zero.
    pub fn day_count(&self) -> u64 {
        ((self.end - self.start).whole_days() + 1).max(1) as u64
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The window presets offered by the dashboard period picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowPreset {
    /// The ISO week (Monday through Sunday) containing the anchor.
    Week,
    /// The calendar month containing the anchor.
    Month,
    /// The calendar year containing the anchor.
    Year,
}

impl WindowPreset {
    /// The preset selected when the user has not picked one.
    pub fn default_preset() -> Self {
        Self::Month
    }

    /// The value used in query strings and saved preferences.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Compute the window containing `anchor`.
    pub fn window_for(self, anchor: Date) -> ReportingWindow {
        match self {
            Self::Week => week_bounds(anchor),
            Self::Month => month_bounds(anchor.year(), anchor.month()),
            Self::Year => year_bounds(anchor.year()),
        }
    }
}

fn week_bounds(anchor: Date) -> ReportingWindow {
    let weekday_number = anchor.weekday().number_from_monday() as i64;
    let start = anchor - Duration::days(weekday_number - 1);

    ReportingWindow {
        start,
        end: start + Duration::days(6),
    }
}

fn month_bounds(year: i32, month: Month) -> ReportingWindow {
    let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
        .expect("invalid month end date");

    ReportingWindow { start, end }
}

fn year_bounds(year: i32) -> ReportingWindow {
    ReportingWindow {
        start: Date::from_calendar_date(year, Month::January, 1).expect("invalid year start date"),
        end: Date::from_calendar_date(year, Month::December, 31).expect("invalid year end date"),
    }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{ReportingWindow, WindowPreset};

    #[test]
    fn week_preset_spans_monday_to_sunday() {
        // 2024-01-10 is a Wednesday.
        let got = WindowPreset::Week.window_for(date!(2024 - 01 - 10));

        assert_eq!(got.start, date!(2024 - 01 - 08));
        assert_eq!(got.end, date!(2024 - 01 - 14));
        assert_eq!(got.day_count(), 7);
    }

    #[test]
    fn month_preset_spans_whole_month() {
        let got = WindowPreset::Month.window_for(date!(2024 - 01 - 15));

        assert_eq!(got.start, date!(2024 - 01 - 01));
        assert_eq!(got.end, date!(2024 - 01 - 31));
        assert_eq!(got.day_count(), 31);
    }

    #[test]
    fn month_preset_handles_leap_february() {
        let leap = WindowPreset::Month.window_for(date!(2024 - 02 - 10));
        let common = WindowPreset::Month.window_for(date!(2023 - 02 - 10));

        assert_eq!(leap.end, date!(2024 - 02 - 29));
        assert_eq!(common.end, date!(2023 - 02 - 28));
    }

    #[test]
    fn year_preset_spans_whole_year() {
        let got = WindowPreset::Year.window_for(date!(2024 - 06 - 15));

        assert_eq!(got.start, date!(2024 - 01 - 01));
        assert_eq!(got.end, date!(2024 - 12 - 31));
        assert_eq!(got.day_count(), 366);
    }

    #[test]
    fn day_count_clamps_reversed_windows() {
        let got = ReportingWindow::new(date!(2024 - 01 - 31), date!(2024 - 01 - 01));

        assert_eq!(got.day_count(), 1);
    }

    #[test]
    fn contains_is_inclusive_of_both_ends() {
        let window = ReportingWindow::new(date!(2024 - 01 - 01), date!(2024 - 01 - 31));

        assert!(window.contains(date!(2024 - 01 - 01)));
        assert!(window.contains(date!(2024 - 01 - 31)));
        assert!(!window.contains(date!(2023 - 12 - 31)));
        assert!(!window.contains(date!(2024 - 02 - 01)));
    }
}

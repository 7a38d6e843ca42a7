//! Calendar domain logic for the duo planner.
//!
//! Month grid geometry and month navigation. The grid is Sunday-first:
//! week row 0 carries `starting_weekday` padding cells before day 1, and
//! the number of week rows is `ceil((starting_weekday + days_in_month) / 7)`.
//! All computations are pure; the month pointer itself is owned by the
//! caller.

use chrono::{Datelike, NaiveDate};
use shared::CalendarMonth;

/// Calendar service handling month grid construction and navigation.
///
/// Months are 0-based (0 = January .. 11 = December) everywhere on the
/// public surface.
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the grid geometry for a month.
    ///
    /// Total over the proleptic Gregorian calendar; there is no failure
    /// case for any valid (year, 0..11) pair.
    pub fn build_month(&self, year: i32, month: u32) -> CalendarMonth {
        let days_in_month = self.days_in_month(year, month);
        let starting_weekday = self.first_weekday(year, month);
        let week_count = (starting_weekday + days_in_month + 6) / 7;

        log::debug!(
            "built month grid {}/{}: {} days, starts on weekday {}, {} week rows",
            year,
            month + 1,
            days_in_month,
            starting_weekday,
            week_count
        );

        CalendarMonth {
            year,
            month,
            days_in_month,
            starting_weekday,
            week_count,
        }
    }

    /// Number of days in a month, honoring Gregorian leap years.
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        match month {
            1 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of day 1 of the month (0 = Sunday .. 6 = Saturday).
    pub fn first_weekday(&self, year: i32, month: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month + 1, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            // Out-of-range month index, fall back to Sunday
            0
        }
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            0 => "January",
            1 => "February",
            2 => "March",
            3 => "April",
            4 => "May",
            5 => "June",
            6 => "July",
            7 => "August",
            8 => "September",
            9 => "October",
            10 => "November",
            11 => "December",
            _ => "Invalid Month",
        }
    }

    /// The month before `(year, month)`, rolling the year back at January.
    pub fn previous_month(&self, year: i32, month: u32) -> (i32, u32) {
        if month == 0 {
            (year - 1, 11)
        } else {
            (year, month - 1)
        }
    }

    /// The month after `(year, month)`, rolling the year forward at December.
    pub fn next_month(&self, year: i32, month: u32) -> (i32, u32) {
        if month == 11 {
            (year + 1, 0)
        } else {
            (year, month + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(2025, 0), 31); // January
        assert_eq!(service.days_in_month(2025, 3), 30); // April
        assert_eq!(service.days_in_month(2025, 1), 28); // February (non-leap)
        assert_eq!(service.days_in_month(2024, 1), 29); // February (leap year)
        assert_eq!(service.days_in_month(2025, 11), 31); // December
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024)); // divisible by 4
        assert!(!service.is_leap_year(1900)); // divisible by 100 but not 400
        assert!(service.is_leap_year(2000)); // divisible by 400
    }

    #[test]
    fn test_build_month_april_2024() {
        // April 1, 2024 was a Monday
        let month = CalendarService::new().build_month(2024, 3);

        assert_eq!(month.year, 2024);
        assert_eq!(month.month, 3);
        assert_eq!(month.days_in_month, 30);
        assert_eq!(month.starting_weekday, 1);
        assert_eq!(month.week_count, 5);
    }

    #[test]
    fn test_build_month_six_week_month() {
        // March 2025: starts Saturday (weekday 6), 31 days -> 6 rows
        let month = CalendarService::new().build_month(2025, 2);

        assert_eq!(month.starting_weekday, 6);
        assert_eq!(month.week_count, 6);
    }

    #[test]
    fn test_build_month_four_week_month() {
        // February 2026: starts Sunday, 28 days -> exactly 4 rows
        let month = CalendarService::new().build_month(2026, 1);

        assert_eq!(month.starting_weekday, 0);
        assert_eq!(month.days_in_month, 28);
        assert_eq!(month.week_count, 4);
    }

    #[test]
    fn test_week_count_invariant_across_years() {
        let service = CalendarService::new();

        for year in 1999..=2031 {
            for month in 0..12 {
                let grid = service.build_month(year, month);
                let expected = (grid.starting_weekday + grid.days_in_month + 6) / 7;
                assert_eq!(grid.week_count, expected, "{}/{}", year, month + 1);
                assert!((4..=6).contains(&grid.week_count));
            }
        }
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(0), "January");
        assert_eq!(service.month_name(3), "April");
        assert_eq!(service.month_name(11), "December");
        assert_eq!(service.month_name(12), "Invalid Month");
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(2025, 5), (2025, 4));
        assert_eq!(service.previous_month(2025, 0), (2024, 11));
        assert_eq!(service.next_month(2025, 5), (2025, 6));
        assert_eq!(service.next_month(2025, 11), (2026, 0));
    }
}

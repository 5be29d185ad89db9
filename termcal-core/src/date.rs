//! Pure calendar arithmetic.
//!
//! Dates are `(day, month, year)` triples with 1-based days and 0-based
//! months (0 = January .. 11 = December). Weekdays are 0-based starting at
//! Monday (0 = Monday .. 6 = Sunday); this convention is used everywhere,
//! including the `day_name` table.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// A plain calendar date. Day 1-based, month 0-based.
///
/// Carries no validation against the month length; callers construct dates
/// from already-normalized values or normalize via [`advance_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl CalDate {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        CalDate { day, month, year }
    }

    /// The current local date.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        CalDate {
            day: now.day() as i32,
            month: now.month0() as i32,
            year: now.year(),
        }
    }

    /// Weekday of this date (0 = Monday .. 6 = Sunday).
    pub fn weekday(&self) -> i32 {
        day_of_week(self.day, self.month, self.year)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Gregorian month length. Returns 0 for a month outside `0..=11`.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// Sakamoto's method, indexed by 0-based month. The raw result is
// Sunday-based and gets shifted to the Monday = 0 convention.
const SAKAMOTO: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Weekday of an arbitrary date (0 = Monday .. 6 = Sunday).
pub fn day_of_week(day: i32, month: i32, year: i32) -> i32 {
    let Some(&t) = SAKAMOTO.get(month as usize) else {
        return 0;
    };
    let y = if month < 2 { year - 1 } else { year };
    let sunday_based = (y + y / 4 - y / 100 + y / 400 + t + day) % 7;
    (sunday_based + 6) % 7
}

/// Weekday of the 1st of the given month (0 = Monday .. 6 = Sunday).
pub fn first_day_of_month(month: i32, year: i32) -> i32 {
    day_of_week(1, month, year)
}

/// The Monday on or before the given date, rolling backward across
/// month and year boundaries as needed.
pub fn monday_of_week(date: CalDate) -> CalDate {
    let weekday = date.weekday();

    let mut day = date.day - weekday;
    let mut month = date.month;
    let mut year = date.year;

    while day < 1 {
        month -= 1;
        if month < 0 {
            month = 11;
            year -= 1;
        }
        day += days_in_month(month, year);
    }

    CalDate { day, month, year }
}

/// Seven consecutive day numbers starting at `start_day`, confined to the
/// given month. Entries past the end of the month are `None`; the sequence
/// does not roll into the next month. Use [`resolve_day`] when true 7-day
/// continuity across a month boundary is needed.
pub fn week_dates(start_day: i32, month: i32, year: i32) -> [Option<i32>; 7] {
    let days = days_in_month(month, year);
    let mut dates = [None; 7];
    for (i, slot) in dates.iter_mut().enumerate() {
        let day = start_day + i as i32;
        if day <= days {
            *slot = Some(day);
        }
    }
    dates
}

/// Shift a date by a number of days, normalizing day overflow and
/// underflow against the month lengths in both directions.
pub fn advance_days(date: CalDate, delta: i32) -> CalDate {
    let mut day = date.day + delta;
    let mut month = date.month;
    let mut year = date.year;

    let mut days_in_current = days_in_month(month, year);
    while day > days_in_current {
        day -= days_in_current;
        month += 1;
        if month > 11 {
            month = 0;
            year += 1;
        }
        days_in_current = days_in_month(month, year);
    }

    while day < 1 {
        month -= 1;
        if month < 0 {
            month = 11;
            year -= 1;
        }
        day += days_in_month(month, year);
    }

    CalDate { day, month, year }
}

/// Shift a date by one week forward (`direction = 1`) or backward
/// (`direction = -1`).
pub fn advance_week(date: CalDate, direction: i32) -> CalDate {
    advance_days(date, 7 * direction)
}

/// Resolve the date `offset` days after `start_day` of the given month,
/// rolling forward across month and year boundaries. This is the per-day
/// resolution the time grid uses, where `start_day + offset` may exceed
/// the month length.
pub fn resolve_day(start_day: i32, month: i32, year: i32, offset: i32) -> CalDate {
    advance_days(
        CalDate {
            day: 1,
            month,
            year,
        },
        start_day + offset - 1,
    )
}

/// Full month name, or the empty string for a month outside `0..=11`.
pub fn month_name(month: i32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

/// Short weekday name (Monday first), or the empty string for an index
/// outside `0..=6`.
pub fn day_name(weekday: i32) -> &'static str {
    DAY_NAMES.get(weekday as usize).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn february_follows_gregorian_leap_rule() {
        for year in 1890..2110 {
            let expected = if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            };
            assert_eq!(days_in_month(1, year), expected, "year {}", year);
        }
        assert_eq!(days_in_month(1, 1900), 28);
        assert_eq!(days_in_month(1, 2000), 29);
        assert_eq!(days_in_month(1, 2024), 29);
    }

    #[test]
    fn month_lengths() {
        let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, expected) in lengths.iter().enumerate() {
            assert_eq!(days_in_month(month as i32, 2023), *expected);
        }
        assert_eq!(days_in_month(-1, 2023), 0);
        assert_eq!(days_in_month(12, 2023), 0);
    }

    #[test]
    fn weekday_matches_chrono_across_a_decade() {
        let mut date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2029, 1, 1).unwrap();
        while date < end {
            let expected = date.weekday().num_days_from_monday() as i32;
            assert_eq!(
                day_of_week(date.day() as i32, date.month0() as i32, date.year()),
                expected,
                "date {}",
                date
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn first_day_of_month_known_values() {
        // September 2025 starts on a Monday, June 2025 on a Sunday.
        assert_eq!(first_day_of_month(8, 2025), 0);
        assert_eq!(first_day_of_month(5, 2025), 6);
    }

    #[test]
    fn monday_of_week_is_a_monday_on_or_before() {
        for year in [2023, 2024, 2025] {
            for month in 0..12 {
                for day in 1..=days_in_month(month, year) {
                    let date = CalDate::new(day, month, year);
                    let monday = monday_of_week(date);
                    assert_eq!(monday.weekday(), 0);
                    // Within the same week, at most six days back.
                    let back = date.weekday();
                    assert_eq!(advance_days(monday, back), date);
                }
            }
        }
    }

    #[test]
    fn monday_of_week_rolls_across_year_boundary() {
        // Jan 1 2025 is a Wednesday; its Monday is Dec 30 2024.
        let monday = monday_of_week(CalDate::new(1, 0, 2025));
        assert_eq!(monday, CalDate::new(30, 11, 2024));
    }

    #[test]
    fn week_dates_marks_days_past_month_end_invalid() {
        let dates = week_dates(27, 8, 2025); // September has 30 days
        assert_eq!(
            dates,
            [Some(27), Some(28), Some(29), Some(30), None, None, None]
        );
        assert_eq!(week_dates(1, 0, 2025)[6], Some(7));
    }

    #[test]
    fn advance_week_round_trips() {
        for year in [2024, 2025] {
            for month in 0..12 {
                for day in 1..=days_in_month(month, year) {
                    let date = CalDate::new(day, month, year);
                    assert_eq!(advance_week(advance_week(date, 1), -1), date);
                    assert_eq!(advance_week(advance_week(date, -1), 1), date);
                }
            }
        }
    }

    #[test]
    fn advance_week_rolls_months_and_years() {
        assert_eq!(
            advance_week(CalDate::new(29, 11, 2024), 1),
            CalDate::new(5, 0, 2025)
        );
        assert_eq!(
            advance_week(CalDate::new(3, 0, 2025), -1),
            CalDate::new(27, 11, 2024)
        );
        // Leap February.
        assert_eq!(
            advance_week(CalDate::new(26, 1, 2024), 1),
            CalDate::new(4, 2, 2024)
        );
    }

    #[test]
    fn resolve_day_rolls_forward_over_month_ends() {
        // Week starting Sep 29 2025: offsets 2.. land in October.
        assert_eq!(resolve_day(29, 8, 2025, 0), CalDate::new(29, 8, 2025));
        assert_eq!(resolve_day(29, 8, 2025, 2), CalDate::new(1, 9, 2025));
        // December into January.
        assert_eq!(resolve_day(30, 11, 2024, 3), CalDate::new(2, 0, 2025));
    }

    #[test]
    fn name_lookups_return_empty_out_of_range() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(-1), "");
        assert_eq!(month_name(12), "");
        assert_eq!(day_name(0), "MON");
        assert_eq!(day_name(6), "SUN");
        assert_eq!(day_name(-3), "");
        assert_eq!(day_name(7), "");
    }
}

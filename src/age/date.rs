//! Calendar helpers - month lengths and overflow dates.
//!
//! Chrono rejects invalid calendar dates (`from_ymd_opt` returns `None`),
//! so day overflow has to be resolved explicitly. `date_with_overflow`
//! pins the rule: excess days roll into the following month, which is
//! what matters for Feb 29 anniversaries in non-leap years (they land
//! on Mar 1).
//!
//! Months are 0-indexed (0 = January) throughout this crate, matching
//! the selection model. Chrono wants 1-indexed months, so the bridge
//! happens here.

use chrono::NaiveDate;

/// Number of days in a month (0-indexed), honoring leap years.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // out-of-range month, keeps the function total
    }
}

/// Gregorian leap-year rule:
///   - divisible by 4 -> leap year
///   - except divisible by 100 -> not leap year
///   - except divisible by 400 -> leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Build a date from a 0-indexed month, rolling day overflow into the
/// following month.
///
/// `date_with_overflow(2025, 1, 29)` is Mar 1 2025: February 2025 has
/// 28 days and the 29th spills over by one.
pub fn date_with_overflow(year: i32, month0: u32, day: u32) -> NaiveDate {
    let month0 = month0 % 12;
    let last = days_in_month(year, month0);

    let (y, m0, d) = if day <= last {
        (year, month0, day.max(1))
    } else if month0 == 11 {
        (year + 1, 0, day - last)
    } else {
        (year, month0 + 1, day - last)
    };

    // Day is within the month after the roll above, so construction
    // cannot fail for any overflow a single month can produce.
    NaiveDate::from_ymd_opt(y, m0 + 1, d)
        .or_else(|| NaiveDate::from_ymd_opt(y, m0 + 1, days_in_month(y, m0)))
        .expect("rolled day fits its month")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 0), 31); // January
        assert_eq!(days_in_month(2023, 3), 30); // April
        assert_eq!(days_in_month(2023, 1), 28); // February, non-leap
        assert_eq!(days_in_month(2024, 1), 29); // February, leap
        assert_eq!(days_in_month(2023, 11), 31); // December
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // divisible by 100 only
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_valid_date_passes_through() {
        let d = date_with_overflow(2024, 1, 29);
        assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
    }

    #[test]
    fn test_feb_29_rolls_to_mar_1() {
        let d = date_with_overflow(2025, 1, 29);
        assert_eq!((d.year(), d.month(), d.day()), (2025, 3, 1));
    }

    #[test]
    fn test_december_overflow_rolls_into_next_year() {
        let d = date_with_overflow(2024, 11, 32);
        assert_eq!((d.year(), d.month(), d.day()), (2025, 1, 1));
    }

    #[test]
    fn test_zero_day_clamps_to_first() {
        let d = date_with_overflow(2024, 5, 0);
        assert_eq!((d.year(), d.month(), d.day()), (2024, 6, 1));
    }
}

//! Age Calculator - precise age from a birth instant.
//!
//! Pure and synchronous: given a birth instant and a current instant,
//! produce an [`AgeSnapshot`] with the integer year count, a 12-digit
//! fractional-year string, elapsed seconds/days, and the countdown to
//! the next anniversary. The frame loop calls this once per frame, so
//! everything here is O(1) with no allocation beyond the digit string.
//!
//! The year length is a fixed 365.25 days (31,557,600,000 ms). That
//! averages leap years out instead of resolving per-date calendars,
//! which is what keeps the fractional digits advancing smoothly.
//!
//! A birth instant in the future yields a negative elapsed time and the
//! derived values go negative with it. The calculator stays total and
//! does not correct for that; the entry screen refuses to submit future
//! dates (see `app`).

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime};

use super::date::date_with_overflow;
use super::zodiac::zodiac_sign;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Approximate year length: 365.25 days in milliseconds.
pub const MS_PER_YEAR: i64 = 31_557_600_000;

/// One day in milliseconds.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Life-expectancy baseline for the progress bar: 80 years in seconds.
pub const LIFE_EXPECTANCY_SECONDS: f64 = 80.0 * 365.25 * 86_400.0;

// =============================================================================
// BIRTH INSTANT
// =============================================================================

/// An immutable point in time a person was born, at local midnight.
///
/// Constructed from the entry screen's selection at submission and
/// owned by the results screen for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInstant {
    datetime: NaiveDateTime,
}

impl BirthInstant {
    /// Build from a year, 0-indexed month, and day-of-month.
    ///
    /// Out-of-range days are resolved by calendar overflow, not
    /// re-validated: day 31 of a 30-day month rolls into the next
    /// month, the same normalization the selection wheels rely on.
    pub fn from_ymd(year: i32, month0: u32, day: u32) -> Self {
        let date = date_with_overflow(year, month0, day);
        Self {
            datetime: date.and_time(NaiveTime::MIN),
        }
    }

    /// The underlying instant (local wall-clock semantics).
    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// 0-indexed birth month.
    pub fn month0(&self) -> u32 {
        self.datetime.month0()
    }

    /// Day of the birth month (1-based).
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    /// Zodiac sign for this birth date. Fixed for the instant's
    /// lifetime, so callers compute it once.
    pub fn zodiac(&self) -> &'static str {
        zodiac_sign(self.day(), self.month0())
    }
}

/// Sample the current local wall-clock instant.
pub fn current_instant() -> NaiveDateTime {
    Local::now().naive_local()
}

// =============================================================================
// FRACTIONAL YEARS
// =============================================================================

/// The fractional part of an age in years, as exactly 12 decimal
/// digits (zero-padded, no leading "0.").
///
/// Displayed as three groups of four digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalYears {
    digits: String,
}

impl FractionalYears {
    /// Expand a fraction in `[0, 1)` to 12 digits.
    fn from_fraction(fraction: f64) -> Self {
        let formatted = format!("{:.12}", fraction);
        // "0.xxxxxxxxxxxx" is 14 chars; so is "1.000000000000" when
        // rounding carries over, and slicing still yields 12 zeros.
        let digits = formatted
            .get(2..14)
            .map(str::to_owned)
            .unwrap_or_else(|| "0".repeat(12));
        Self { digits }
    }

    /// All 12 digits.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// One of the three 4-digit display groups (0, 1, or 2).
    pub fn group(&self, index: usize) -> &str {
        let start = (index % 3) * 4;
        &self.digits[start..start + 4]
    }
}

// =============================================================================
// AGE SNAPSHOT
// =============================================================================

/// Everything the results screen displays, computed from one pair of
/// instants. Recomputed every frame, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeSnapshot {
    /// Whole years of age. Non-negative for any birth in the past.
    pub years: i64,
    /// 12-digit fractional-year component.
    pub fractional: FractionalYears,
    /// Seconds lived, floored.
    pub elapsed_seconds: i64,
    /// Days lived, floored.
    pub elapsed_days: i64,
    /// Days until the next birthday, rounded up. In `[1, 366]`: an
    /// anniversary today counts as a full year away.
    pub days_to_next_anniversary: i64,
}

/// Compute an [`AgeSnapshot`] for a birth instant at a given moment.
///
/// Total and side-effect-free. All fields derive from the same pair of
/// instants, so values displayed together never tear.
pub fn calculate(birth: &BirthInstant, now: NaiveDateTime) -> AgeSnapshot {
    let elapsed_ms = (now - birth.datetime()).num_milliseconds();

    let total_years = elapsed_ms as f64 / MS_PER_YEAR as f64;
    let years_f = total_years.floor();
    let years = years_f as i64;
    let fractional = FractionalYears::from_fraction(total_years - years_f);

    AgeSnapshot {
        years,
        fractional,
        elapsed_seconds: elapsed_ms.div_euclid(1000),
        elapsed_days: elapsed_ms.div_euclid(MS_PER_DAY),
        days_to_next_anniversary: days_to_next_anniversary(birth, now),
    }
}

/// Days until the next occurrence of the birth month/day, rounded up.
///
/// The candidate anniversary in the current year is used only when it
/// is strictly after `now`; otherwise it advances one calendar year.
/// Feb 29 births observe Mar 1 in non-leap years (calendar overflow).
fn days_to_next_anniversary(birth: &BirthInstant, now: NaiveDateTime) -> i64 {
    let candidate =
        date_with_overflow(now.year(), birth.month0(), birth.day()).and_time(NaiveTime::MIN);

    let next = if candidate > now {
        candidate
    } else {
        date_with_overflow(now.year() + 1, birth.month0(), birth.day()).and_time(NaiveTime::MIN)
    };

    let diff_ms = (next - now).num_milliseconds().abs();
    (diff_ms as u64).div_ceil(MS_PER_DAY as u64) as i64
}

/// Fraction of an 80-year life already lived, as a percentage clamped
/// to `[0, 100]`. Drives the progress bar.
pub fn life_progress(elapsed_seconds: i64) -> f64 {
    (elapsed_seconds as f64 / LIFE_EXPECTANCY_SECONDS * 100.0).clamp(0.0, 100.0)
}

/// Concatenate the displayed age into one literal decimal string,
/// e.g. years 25 with groups 1234/5678/9012 -> `25.123456789012`.
///
/// This is the clipboard export format and must stay byte-exact.
pub fn format_precise(years: i64, fractional: &FractionalYears) -> String {
    format!(
        "{}.{}{}{}",
        years,
        fractional.group(0),
        fractional.group(1),
        fractional.group(2)
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_reference_example() {
        let birth = BirthInstant::from_ymd(1998, 5, 15); // 1998-06-15
        let now = instant(2024, 6, 15, 0, 0, 0);
        let snapshot = calculate(&birth, now);

        assert_eq!(snapshot.years, 26);
        assert_eq!(snapshot.elapsed_days, 9497);
        assert_eq!(snapshot.elapsed_seconds, 9497 * 86_400);
    }

    #[test]
    fn test_years_non_negative_for_past_births() {
        let birth = BirthInstant::from_ymd(2000, 0, 1);
        let now = instant(2000, 1, 1, 12, 0, 0);
        assert!(calculate(&birth, now).years >= 0);
    }

    #[test]
    fn test_fractional_always_12_digits() {
        let birth = BirthInstant::from_ymd(1990, 3, 7);
        let samples = [
            instant(1990, 4, 7, 0, 0, 0),
            instant(2007, 4, 7, 23, 59, 59),
            instant(2024, 12, 31, 6, 30, 15),
        ];

        for now in samples {
            let snapshot = calculate(&birth, now);
            assert_eq!(snapshot.fractional.digits().len(), 12);
            assert!(snapshot.fractional.digits().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_fractional_groups_partition_digits() {
        let frac = FractionalYears {
            digits: "123456789012".to_string(),
        };
        assert_eq!(frac.group(0), "1234");
        assert_eq!(frac.group(1), "5678");
        assert_eq!(frac.group(2), "9012");
    }

    #[test]
    fn test_fractional_rounding_carry_stays_12_digits() {
        // A fraction that rounds up to 1.000000000000 at 12 places.
        let frac = FractionalYears::from_fraction(0.999_999_999_999_9);
        assert_eq!(frac.digits(), "000000000000");
    }

    #[test]
    fn test_elapsed_seconds_monotone() {
        let birth = BirthInstant::from_ymd(1985, 10, 20);
        let t1 = instant(2020, 3, 4, 5, 6, 7);
        let t2 = instant(2020, 3, 4, 5, 6, 8);

        let s1 = calculate(&birth, t1).elapsed_seconds;
        let s2 = calculate(&birth, t2).elapsed_seconds;
        assert!(s1 <= s2);
        assert_eq!(s2 - s1, 1);
    }

    #[test]
    fn test_years_advance_across_year_boundary() {
        let birth = BirthInstant::from_ymd(2000, 0, 1);
        // Just under and just over 24 approximate years.
        let before = birth.datetime() + chrono::Duration::milliseconds(24 * MS_PER_YEAR - 1);
        let after = birth.datetime() + chrono::Duration::milliseconds(24 * MS_PER_YEAR);

        assert_eq!(calculate(&birth, before).years, 23);
        assert_eq!(calculate(&birth, after).years, 24);
    }

    #[test]
    fn test_anniversary_today_rolls_to_next_year() {
        let birth = BirthInstant::from_ymd(1998, 5, 15);
        let now = instant(2024, 6, 15, 0, 0, 0);
        let snapshot = calculate(&birth, now);

        // 2024-06-15 is not strictly after now, so the next anniversary
        // is 2025-06-15: a full non-leap-crossing year away.
        assert_eq!(snapshot.days_to_next_anniversary, 365);
    }

    #[test]
    fn test_anniversary_tomorrow() {
        let birth = BirthInstant::from_ymd(1998, 5, 15);
        let now = instant(2024, 6, 14, 12, 0, 0);
        let snapshot = calculate(&birth, now);

        // Half a day away, rounded up.
        assert_eq!(snapshot.days_to_next_anniversary, 1);
    }

    #[test]
    fn test_anniversary_rollover_at_year_end() {
        let birth = BirthInstant::from_ymd(1990, 0, 10); // Jan 10
        let now = instant(2024, 12, 30, 0, 0, 0);
        let snapshot = calculate(&birth, now);

        assert_eq!(snapshot.days_to_next_anniversary, 11); // Jan 10 next year
    }

    #[test]
    fn test_feb_29_birth_observes_mar_1_in_non_leap_year() {
        let birth = BirthInstant::from_ymd(2000, 1, 29); // Feb 29
        let now = instant(2025, 2, 1, 0, 0, 0); // Feb 1, 2025 (non-leap)
        let snapshot = calculate(&birth, now);

        // Candidate rolls to 2025-03-01: 28 days away.
        assert_eq!(snapshot.days_to_next_anniversary, 28);
    }

    #[test]
    fn test_future_birth_goes_negative_unchecked() {
        let birth = BirthInstant::from_ymd(2100, 0, 1);
        let now = instant(2024, 6, 1, 0, 0, 0);
        let snapshot = calculate(&birth, now);

        assert!(snapshot.years < 0);
        assert!(snapshot.elapsed_seconds < 0);
        // The fractional expansion stays well-formed even here.
        assert_eq!(snapshot.fractional.digits().len(), 12);
    }

    #[test]
    fn test_life_progress_bounds() {
        assert_eq!(life_progress(0), 0.0);
        assert_eq!(life_progress(-100), 0.0);
        assert_eq!(life_progress(i64::MAX / 2), 100.0);

        let halfway = (LIFE_EXPECTANCY_SECONDS / 2.0) as i64;
        assert!((life_progress(halfway) - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_format_precise_concatenation() {
        let frac = FractionalYears {
            digits: "123456789012".to_string(),
        };
        assert_eq!(format_precise(25, &frac), "25.123456789012");
    }

    #[test]
    fn test_zodiac_from_birth_instant() {
        assert_eq!(BirthInstant::from_ymd(1998, 5, 15).zodiac(), "双子座");
        assert_eq!(BirthInstant::from_ymd(2000, 0, 19).zodiac(), "摩羯座");
        assert_eq!(BirthInstant::from_ymd(2000, 0, 20).zodiac(), "水瓶座");
    }
}

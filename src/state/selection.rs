//! Date selection state for the entry screen.
//!
//! A `DateSelection` is the mutable year/month/day triple behind the
//! three wheel columns. It is owned exclusively by the entry screen and
//! only leaves it as an immutable `BirthInstant` at submission.
//!
//! Wrap rules per field:
//! - **Year** - unbounded in both directions.
//! - **Month** - cyclic, carrying the year (Dec -> Jan advances the
//!   year, Jan -> Dec retreats it).
//! - **Day** - cyclic within the currently selected month's length,
//!   leap years included. No carry into the month.

use crate::age::days_in_month;
use crate::state::wheel::Step;

/// Month display labels for the wheel column (0-indexed).
pub const MONTH_ABBR: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月",
    "7月", "8月", "9月", "10月", "11月", "12月",
];

/// The three selectable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
}

/// A year/month/day triple under edit. Month is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Default for DateSelection {
    /// Roughly 25 years back, a comfortable starting point.
    fn default() -> Self {
        Self {
            day: 15,
            month: 5, // June
            year: 1998,
        }
    }
}

impl DateSelection {
    /// Apply one wheel step to one field.
    pub fn apply(&mut self, field: Field, step: Step) {
        match (field, step) {
            (Field::Year, Step::Advance) => self.year += 1,
            (Field::Year, Step::Retreat) => self.year -= 1,
            (Field::Month, Step::Advance) => self.advance_month(),
            (Field::Month, Step::Retreat) => self.retreat_month(),
            (Field::Day, Step::Advance) => self.advance_day(),
            (Field::Day, Step::Retreat) => self.retreat_day(),
        }
    }

    fn advance_month(&mut self) {
        if self.month == 11 {
            self.month = 0;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    fn retreat_month(&mut self) {
        if self.month == 0 {
            self.month = 11;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    fn advance_day(&mut self) {
        if self.day >= days_in_month(self.year, self.month) {
            self.day = 1;
        } else {
            self.day += 1;
        }
    }

    fn retreat_day(&mut self) {
        if self.day <= 1 {
            self.day = days_in_month(self.year, self.month);
        } else {
            self.day -= 1;
        }
    }

    /// Wheel display values for a field: (previous, current, next).
    pub fn wheel_values(&self, field: Field) -> (String, String, String) {
        match field {
            Field::Year => (
                (self.year - 1).to_string(),
                self.year.to_string(),
                (self.year + 1).to_string(),
            ),
            Field::Month => {
                let prev = if self.month == 0 { 11 } else { self.month - 1 };
                let next = if self.month == 11 { 0 } else { self.month + 1 };
                (
                    MONTH_ABBR[prev as usize].to_string(),
                    MONTH_ABBR[self.month as usize].to_string(),
                    MONTH_ABBR[next as usize].to_string(),
                )
            }
            Field::Day => {
                let last = days_in_month(self.year, self.month);
                let prev = if self.day <= 1 { last } else { self.day - 1 };
                let next = if self.day >= last { 1 } else { self.day + 1 };
                (prev.to_string(), self.day.to_string(), next.to_string())
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let sel = DateSelection::default();
        assert_eq!((sel.year, sel.month, sel.day), (1998, 5, 15));
    }

    #[test]
    fn test_year_unbounded() {
        let mut sel = DateSelection::default();
        sel.apply(Field::Year, Step::Advance);
        assert_eq!(sel.year, 1999);
        sel.apply(Field::Year, Step::Retreat);
        sel.apply(Field::Year, Step::Retreat);
        assert_eq!(sel.year, 1997);
    }

    #[test]
    fn test_month_wraps_carrying_year() {
        let mut sel = DateSelection {
            day: 1,
            month: 11,
            year: 2020,
        };
        sel.apply(Field::Month, Step::Advance);
        assert_eq!((sel.month, sel.year), (0, 2021));

        sel.apply(Field::Month, Step::Retreat);
        assert_eq!((sel.month, sel.year), (11, 2020));
    }

    #[test]
    fn test_day_wraps_at_month_length() {
        let mut sel = DateSelection {
            day: 28,
            month: 1, // February
            year: 2023,
        };
        sel.apply(Field::Day, Step::Advance);
        assert_eq!(sel.day, 1);

        sel.apply(Field::Day, Step::Retreat);
        assert_eq!(sel.day, 28);
    }

    #[test]
    fn test_day_wrap_honors_leap_year() {
        let mut sel = DateSelection {
            day: 1,
            month: 1,
            year: 2024,
        };
        sel.apply(Field::Day, Step::Retreat);
        assert_eq!(sel.day, 29);
    }

    #[test]
    fn test_wheel_values_day_edges() {
        let sel = DateSelection {
            day: 1,
            month: 0,
            year: 2023,
        };
        let (prev, current, next) = sel.wheel_values(Field::Day);
        assert_eq!((prev.as_str(), current.as_str(), next.as_str()), ("31", "1", "2"));
    }

    #[test]
    fn test_wheel_values_month_edges() {
        let sel = DateSelection {
            day: 10,
            month: 0,
            year: 2023,
        };
        let (prev, current, next) = sel.wheel_values(Field::Month);
        assert_eq!(prev, "12月");
        assert_eq!(current, "1月");
        assert_eq!(next, "2月");
    }
}

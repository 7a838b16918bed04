//! Age Module - the computation core.
//!
//! Pure functions only, no terminal or clock access except the single
//! `current_instant` sampler:
//!
//! - **Calculator** - birth instant + current instant -> age snapshot
//! - **Zodiac** - fixed cutoff-table sign lookup
//! - **Date** - month lengths, leap years, overflow dates

mod calculator;
mod date;
mod zodiac;

pub use calculator::*;
pub use date::{date_with_overflow, days_in_month, is_leap_year};
pub use zodiac::zodiac_sign;

//! Zodiac sign lookup from birth day and month.
//!
//! Each month has a fixed cutoff day that splits it between two adjacent
//! signs. Days before the cutoff belong to the sign that started the
//! previous month; the cutoff day and later belong to the next sign.
//! January is the one special case: days 1-19 stay with Capricorn, the
//! December-side sign, rather than consulting the table.
//!
//! The cutoff table and sign strings are display-compatible values and
//! must not be altered.

/// Cutoff day per month (0-indexed months).
const CUTOFFS: [u32; 12] = [20, 19, 21, 20, 21, 21, 23, 23, 23, 23, 22, 22];

/// Sign that begins in each month (0-indexed months).
const SIGNS: [&str; 12] = [
    "摩羯座", "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座",
    "巨蟹座", "狮子座", "处女座", "天秤座", "天蝎座", "射手座",
];

/// Zodiac sign for a day-of-month and 0-indexed month.
///
/// Total for any input: months wrap modulo 12.
pub fn zodiac_sign(day: u32, month0: u32) -> &'static str {
    let month = (month0 % 12) as usize;

    if month == 0 && day <= 19 {
        // Capricorn runs across the year boundary into January.
        SIGNS[0]
    } else if day < CUTOFFS[month] {
        SIGNS[month]
    } else {
        SIGNS[(month + 1) % 12]
    }
}

// =============================================================================
// TESTS
// =============================================================================

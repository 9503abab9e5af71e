//! Date classification for the quick-entry path.
//!
//! This module maps a calendar date to its default guard type and decides
//! whether a date is a special (double-pay) day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::registry::codes;

/// The fixed special (double-pay) dates, as year-independent `(month, day)`
/// pairs: New Year, Epiphany, Día de Andalucía, Fiesta Nacional, Christmas.
pub const SPECIAL_DAYS: [(u32, u32); 5] = [(1, 1), (1, 6), (2, 28), (10, 7), (12, 25)];

/// Returns the default guard type for a date.
///
/// Monday–Thursday map to the weekday guard; Friday, Saturday, and Sunday
/// each have their own guard type. Manual entry may override this freely.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::classify_date;
/// use nomina_engine::registry::codes;
/// use chrono::NaiveDate;
///
/// // 2025-10-15 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
/// assert_eq!(classify_date(wednesday), codes::G_LJ);
///
/// // 2025-10-05 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
/// assert_eq!(classify_date(sunday), codes::G_DOMINGO);
/// ```
pub fn classify_date(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => codes::G_DOMINGO,
        Weekday::Sat => codes::G_SABADO,
        Weekday::Fri => codes::G_VIERNES,
        _ => codes::G_LJ,
    }
}

/// Returns true if the date's month-day falls in the fixed special-day set.
///
/// The check is year-independent: every December 25th is special.
pub fn is_special_date(date: NaiveDate) -> bool {
    SPECIAL_DAYS
        .iter()
        .any(|&(month, day)| date.month() == month && date.day() == day)
}

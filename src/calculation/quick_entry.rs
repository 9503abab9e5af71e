//! Bulk quick-entry of shift events from a day list.
//!
//! Given a calendar month and a free-form day list such as `"2, 8, 14, 25"`,
//! this module generates one classified event per valid day. Days that do
//! not exist in the month are skipped, never fatal; the batch reports how
//! many entries were generated versus requested.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{ShiftEvent, YearMonth};

use super::classify::classify_date;

/// The outcome of one bulk quick-entry run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickEntryBatch {
    /// The generated events, one per valid requested day.
    pub events: Vec<ShiftEvent>,
    /// Number of events generated.
    pub generated: usize,
    /// Number of numeric day tokens in the input.
    pub requested: usize,
    /// Requested days that do not exist in the month.
    pub skipped_days: Vec<u32>,
}

/// Generates classified shift events for a list of days in one month.
///
/// The day list accepts `,` and `;` separators; tokens that are not plain
/// numbers are ignored entirely. Each valid day becomes an event whose type
/// comes from the weekday classifier and whose special flag comes from the
/// fixed special-day set. Days out of range for the month (e.g. 31 in a
/// 30-day month) are skipped and reported, and generation continues.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::generate_quick_entries;
/// use nomina_engine::models::YearMonth;
///
/// // September 2025 has 30 days: day 31 is skipped, day 2 generates.
/// let month = YearMonth::new(2025, 9).unwrap();
/// let batch = generate_quick_entries(month, "2, 31");
///
/// assert_eq!(batch.requested, 2);
/// assert_eq!(batch.generated, 1);
/// assert_eq!(batch.skipped_days, vec![31]);
/// ```
pub fn generate_quick_entries(month: YearMonth, days: &str) -> QuickEntryBatch {
    let mut batch = QuickEntryBatch::default();

    for token in days.replace(';', ",").split(',') {
        let token = token.trim();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        batch.requested += 1;

        let Ok(day) = token.parse::<u32>() else {
            warn!(%month, token, "skipping oversized day token");
            continue;
        };
        match NaiveDate::from_ymd_opt(month.year(), month.month(), day) {
            Some(date) => {
                batch.events.push(ShiftEvent::new(date, classify_date(date)));
                batch.generated += 1;
            }
            None => {
                warn!(%month, day, "skipping day outside calendar month");
                batch.skipped_days.push(day);
            }
        }
    }

    batch
}

//! Shift event model.
//!
//! This module defines the [`ShiftEvent`] record for representing a single
//! dated act (guardia, tarde, refuerzo) in the payroll system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::is_special_date;

use super::YearMonth;

/// A single dated shift record.
///
/// Events are created by the host application (manual entry or bulk
/// quick-entry), live in an unordered collection, and are deleted by id or
/// bulk-cleared. Existing fields are never mutated in place.
///
/// The serialized shape is a compatibility contract with existing saved
/// backups: the shift-type code is stored under the `type` key.
///
/// # Example
///
/// ```
/// use nomina_engine::models::ShiftEvent;
/// use nomina_engine::registry::codes;
/// use chrono::NaiveDate;
///
/// // 2025-10-07 is in the special-day set, so non-CA pay doubles.
/// let event = ShiftEvent::new(
///     NaiveDate::from_ymd_opt(2025, 10, 7).unwrap(),
///     codes::G_24_MIX,
/// );
/// assert!(event.special);
/// assert_eq!(event.year_month().to_string(), "2025-10");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// The calendar date the shift was worked.
    pub date: NaiveDate,
    /// The shift-type code (e.g. `"G_LJ"`), resolved against the registry.
    #[serde(rename = "type")]
    pub shift_type: String,
    /// Whether the date is a special (double-pay) day. Doubling applies to
    /// monetary value only, never to hour totals, and never to CA hours.
    #[serde(default)]
    pub special: bool,
}

impl ShiftEvent {
    /// Creates a new event with a generated id.
    ///
    /// The special flag is always derived from the date, even when the shift
    /// type is chosen manually rather than by the date classifier.
    pub fn new(date: NaiveDate, shift_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            shift_type: shift_type.into(),
            special: is_special_date(date),
        }
    }

    /// The service month this event belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

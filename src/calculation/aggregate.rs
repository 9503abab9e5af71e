//! Grouping of shift events into service months.

use std::collections::BTreeMap;

use crate::error::PayrollResult;
use crate::models::{MonthlyAggregate, ShiftEvent, YearMonth};
use crate::registry::shift_model;

/// Groups events by service month and sums their hour categories.
///
/// Hour totals are raw sums of each event's registry contribution; the
/// special-day flag affects monetary value only, never hour counts.
///
/// # Errors
///
/// Returns [`crate::error::PayrollError::UnknownShiftType`] if any event
/// references an unregistered type. The whole computation aborts rather than
/// skipping the event, so a stale backup cannot silently under-report a
/// month.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::aggregate_by_month;
/// use nomina_engine::models::{ShiftEvent, YearMonth};
/// use nomina_engine::registry::codes;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let events = vec![
///     ShiftEvent::new(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(), codes::G_LJ),
///     ShiftEvent::new(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(), codes::G_LJ),
/// ];
///
/// let months = aggregate_by_month(&events).unwrap();
/// let october: YearMonth = "2025-10".parse().unwrap();
/// assert_eq!(months[&october].events.len(), 2);
/// assert_eq!(months[&october].hours.labor, Decimal::new(240, 1)); // 2 × 12.0
/// ```
pub fn aggregate_by_month(
    events: &[ShiftEvent],
) -> PayrollResult<BTreeMap<YearMonth, MonthlyAggregate>> {
    let mut months: BTreeMap<YearMonth, MonthlyAggregate> = BTreeMap::new();

    for event in events {
        let model = shift_model(&event.shift_type)?;
        let aggregate = months.entry(event.year_month()).or_default();
        aggregate.hours.accumulate(&model.hours);
        aggregate.events.push(event.clone());
    }

    Ok(months)
}

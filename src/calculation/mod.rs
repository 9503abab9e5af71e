//! Calculation pipeline for the payroll engine.
//!
//! This module contains the date classifier, the monthly aggregator, the
//! financial calculator, the payment-month projection, and the bulk
//! quick-entry generator, plus [`calculate_report`], which runs the whole
//! pipeline over a session's event list.

mod aggregate;
mod classify;
mod financials;
mod payment;
mod quick_entry;

pub use aggregate::aggregate_by_month;
pub use classify::{SPECIAL_DAYS, classify_date, is_special_date};
pub use financials::calculate_month;
pub use payment::project_payments;
pub use quick_entry::{QuickEntryBatch, generate_quick_entries};

use std::collections::BTreeMap;

use crate::config;
use crate::error::PayrollResult;
use crate::models::PayrollReport;
use crate::session::SessionState;

/// Runs the full pipeline over a session's current state.
///
/// Aggregates the event list into service months, resolves each month's
/// effective configuration, calculates its financials, and projects the
/// payment months. Everything is re-derived from scratch on each call; the
/// engine retains no state between invocations.
///
/// # Errors
///
/// Returns [`crate::error::PayrollError::UnknownShiftType`] if any event in
/// the session references an unregistered type.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::calculate_report;
/// use nomina_engine::models::ShiftEvent;
/// use nomina_engine::registry::codes;
/// use nomina_engine::session::SessionState;
/// use chrono::NaiveDate;
///
/// let mut state = SessionState::default();
/// state.add_act(ShiftEvent::new(
///     NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
///     codes::G_LJ,
/// ));
///
/// let report = calculate_report(&state).unwrap();
/// assert_eq!(report.financials.len(), 1);
/// assert_eq!(report.payments.len(), 1);
/// ```
pub fn calculate_report(state: &SessionState) -> PayrollResult<PayrollReport> {
    let aggregates = aggregate_by_month(&state.acts)?;
    let calibration = config::builtin_calibration();
    let typical_normal = config::typical_normal_by_month();

    let mut financials = BTreeMap::new();
    for (month, aggregate) in &aggregates {
        let month_config = config::resolve(
            *month,
            Some(state.global_irpf),
            &calibration,
            &state.month_configs,
        );
        let monthly = calculate_month(*month, &aggregate.events, &month_config)?;
        financials.insert(*month, monthly);
    }

    let payments = project_payments(&financials, &typical_normal, &state.normal_overrides);

    Ok(PayrollReport {
        financials,
        payments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftEvent, YearMonth};
    use crate::registry::codes;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn event(date_str: &str, shift_type: &str, special: bool) -> ShiftEvent {
        ShiftEvent {
            id: format!("{date_str}-{shift_type}"),
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            shift_type: shift_type.to_string(),
            special,
        }
    }

    #[test]
    fn test_report_covers_every_service_month() {
        let mut state = SessionState::default();
        state.add_act(event("2025-09-30", codes::TARDE, false));
        state.add_act(event("2025-10-15", codes::G_LJ, false));

        let report = calculate_report(&state).unwrap();

        assert_eq!(report.financials.len(), 2);
        assert!(report.financials.contains_key(&ym("2025-09")));
        assert!(report.financials.contains_key(&ym("2025-10")));
        assert!(report.payments.contains_key(&ym("2025-10")));
        assert!(report.payments.contains_key(&ym("2025-11")));
    }

    #[test]
    fn test_report_applies_global_tax_rate() {
        let mut state = SessionState::default();
        state.global_irpf = dec("20.0");
        state.add_act(event("2025-10-15", codes::G_LJ, false));

        let report = calculate_report(&state).unwrap();
        let october = &report.financials[&ym("2025-10")];
        assert_eq!(october.config.tax_rate, dec("0.20"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut state = SessionState::default();
        state.add_act(event("2025-10-07", codes::G_24_MIX, true));
        state.add_act(event("2025-10-03", codes::G_VIERNES, false));

        let first = calculate_report(&state).unwrap();
        let second = calculate_report(&state).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_session_produces_empty_report() {
        let report = calculate_report(&SessionState::default()).unwrap();
        assert!(report.financials.is_empty());
        assert!(report.payments.is_empty());
    }
}

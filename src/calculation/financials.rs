//! Monthly accrual, deduction, and net calculation.
//!
//! This is the arithmetic core of the engine: it turns one service month's
//! events plus its resolved configuration into the accrual line items
//! (024/025/180/PF), the deduction line items (IRPF, common contingencies,
//! professional training, solidarity), and the net complementary amount.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::MonthConfig;
use crate::error::PayrollResult;
use crate::models::{
    AccrualBreakdown, DeductionBreakdown, HourBreakdown, MonthlyFinancials, ShiftEvent, YearMonth,
};
use crate::registry::shift_model;

/// Calculates the financial result for one service month.
///
/// Per event, with `factor = 2` on special days and `1` otherwise:
/// - line 024 accrues `(labor·rateLabor + localized·rateLabor·localizedFactor) × factor`,
/// - line 025 accrues `fest·rateFest × factor`,
/// - line 180 accrues `ca·rateCa` — continuity-of-care pay is flat-rate and
///   never doubled, even on special dates.
///
/// The fixed production complement accrues once per month. Deductions are
/// derived from the configuration bases and the accrual total; the net is
/// their difference. All intermediate math stays in full decimal precision;
/// rounding happens only at display time.
///
/// # Errors
///
/// Returns [`crate::error::PayrollError::UnknownShiftType`] if an event
/// references an unregistered type.
pub fn calculate_month(
    month: YearMonth,
    events: &[ShiftEvent],
    config: &MonthConfig,
) -> PayrollResult<MonthlyFinancials> {
    let mut complementary_day = Decimal::ZERO;
    let mut festive_day = Decimal::ZERO;
    let mut continuity = Decimal::ZERO;
    let mut hours = HourBreakdown::default();
    let localized_rate = config.localized_rate();

    for event in events {
        let model = shift_model(&event.shift_type)?;
        let factor = if event.special {
            Decimal::TWO
        } else {
            Decimal::ONE
        };

        complementary_day +=
            (model.hours.labor * config.rates.labor + model.hours.localized * localized_rate)
                * factor;
        festive_day += model.hours.fest * config.rates.fest * factor;
        // CA is flat-rate by policy: the special-day factor never applies.
        continuity += model.hours.ca * config.rates.ca;

        hours.accumulate(&model.hours);
    }

    let accruals = AccrualBreakdown::from_lines(
        complementary_day,
        festive_day,
        continuity,
        config.fixed_production,
    );

    let cc_contribution = config.bases.cc_base_worker * config.bases.cc_rate;
    let fp_contribution = config.bases.cc_base_worker * config.bases.fp_rate;
    let solidarity: Decimal = config
        .bases
        .solidarity
        .iter()
        .map(|tranche| tranche.base * tranche.rate)
        .sum();
    let income_tax = accruals.total * config.tax_rate;

    let deductions =
        DeductionBreakdown::from_lines(income_tax, cc_contribution, fp_contribution, solidarity);
    let net = accruals.total - deductions.total;

    debug!(
        %month,
        events = events.len(),
        accrued = %accruals.total,
        deducted = %deductions.total,
        %net,
        "calculated monthly financials"
    );

    Ok(MonthlyFinancials {
        hours,
        accruals,
        deductions,
        net,
        config: config.clone(),
    })
}

//! Monthly aggregation and financial result models.
//!
//! This module contains the per-month output types of the engine: hour
//! totals, accrual and deduction breakdowns, net results, and the
//! payment-month projection.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MonthConfig;

use super::{ShiftEvent, YearMonth};

/// Hours split across the four pay categories.
///
/// Used both for a single shift model's contribution and for monthly sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourBreakdown {
    /// Continuity-of-care hours, paid flat-rate.
    pub ca: Decimal,
    /// Ordinary workday hours.
    pub labor: Decimal,
    /// Festive workday hours.
    pub fest: Decimal,
    /// On-call localized hours, paid at a fraction of the labor rate.
    pub localized: Decimal,
}

impl HourBreakdown {
    /// Adds another breakdown's hours into this one.
    ///
    /// Hour totals are raw: the special-day flag doubles money, never hours.
    pub fn accumulate(&mut self, other: &HourBreakdown) {
        self.ca += other.ca;
        self.labor += other.labor;
        self.fest += other.fest;
        self.localized += other.localized;
    }
}

/// The shift events of one service month together with summed hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// The events that fall in this month.
    pub events: Vec<ShiftEvent>,
    /// Hour totals per category, summed over `events`.
    pub hours: HourBreakdown,
}

/// Gross accrual line items for one service month.
///
/// The line names follow the payroll slip codes: 024 (complementary
/// workday), 025 (festive workday), 180 (continuity of care) and the fixed
/// production complement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualBreakdown {
    /// Line 024: labor and localized hours, doubled on special days.
    pub complementary_day: Decimal,
    /// Line 025: festive hours, doubled on special days.
    pub festive_day: Decimal,
    /// Line 180: continuity-of-care hours, flat-rate.
    pub continuity: Decimal,
    /// Fixed production complement, accrued once per month.
    pub fixed_production: Decimal,
    /// Sum of the four lines above.
    pub total: Decimal,
}

impl AccrualBreakdown {
    /// Builds a breakdown from its four lines, computing the total.
    pub fn from_lines(
        complementary_day: Decimal,
        festive_day: Decimal,
        continuity: Decimal,
        fixed_production: Decimal,
    ) -> Self {
        Self {
            complementary_day,
            festive_day,
            continuity,
            fixed_production,
            total: complementary_day + festive_day + continuity + fixed_production,
        }
    }
}

/// Deduction line items for one service month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Income tax (IRPF) withheld on the accrual total.
    pub income_tax: Decimal,
    /// Common-contingencies social security contribution.
    pub common_contingencies: Decimal,
    /// Professional-training contribution.
    pub training: Decimal,
    /// Intergenerational solidarity (MEI) contribution, summed over tranches.
    pub solidarity: Decimal,
    /// Sum of the four lines above.
    pub total: Decimal,
}

impl DeductionBreakdown {
    /// Builds a breakdown from its four lines, computing the total.
    pub fn from_lines(
        income_tax: Decimal,
        common_contingencies: Decimal,
        training: Decimal,
        solidarity: Decimal,
    ) -> Self {
        Self {
            income_tax,
            common_contingencies,
            training,
            solidarity,
            total: income_tax + common_contingencies + training + solidarity,
        }
    }
}

/// The complete financial result for one service month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinancials {
    /// Hour totals per category.
    pub hours: HourBreakdown,
    /// Gross accrual breakdown.
    pub accruals: AccrualBreakdown,
    /// Deduction breakdown.
    pub deductions: DeductionBreakdown,
    /// Net complementary amount: `accruals.total - deductions.total`.
    pub net: Decimal,
    /// The resolved configuration this month was calculated with.
    pub config: MonthConfig,
}

/// What arrives in the bank for one payment month.
///
/// Combines the net complementary amounts of every service month paying into
/// this month (normally exactly one) with the estimated normal payroll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentProjection {
    /// Net complementary pay disbursed this month.
    pub complementary: Decimal,
    /// Estimated or user-overridden normal payroll net.
    pub normal: Decimal,
    /// `normal + complementary`.
    pub total: Decimal,
    /// The service months whose complementary pay lands here.
    pub from_months: Vec<YearMonth>,
}

/// The full output of one engine run over a session's event list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Financial results keyed by service month.
    pub financials: BTreeMap<YearMonth, MonthlyFinancials>,
    /// Payment projections keyed by payment month.
    pub payments: BTreeMap<YearMonth, PaymentProjection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hour_breakdown_accumulate() {
        let mut totals = HourBreakdown::default();
        totals.accumulate(&HourBreakdown {
            ca: dec("5"),
            labor: dec("12"),
            fest: dec("0"),
            localized: dec("0"),
        });
        totals.accumulate(&HourBreakdown {
            ca: dec("7.5"),
            labor: dec("0"),
            fest: dec("0"),
            localized: dec("10"),
        });

        assert_eq!(totals.ca, dec("12.5"));
        assert_eq!(totals.labor, dec("12"));
        assert_eq!(totals.localized, dec("10"));
    }

    #[test]
    fn test_accrual_total_is_sum_of_lines() {
        let accruals =
            AccrualBreakdown::from_lines(dec("433.12"), dec("943.04"), dec("235.55"), dec("733.42"));
        assert_eq!(accruals.total, dec("2345.13"));
    }

    #[test]
    fn test_deduction_total_is_sum_of_lines() {
        let deductions =
            DeductionBreakdown::from_lines(dec("820.80"), dec("103.91"), dec("2.15"), dec("16.74"));
        assert_eq!(deductions.total, dec("943.60"));
    }

    #[test]
    fn test_payment_projection_serializes_from_months() {
        let projection = PaymentProjection {
            complementary: dec("1401.53"),
            normal: dec("1561.30"),
            total: dec("2962.83"),
            from_months: vec!["2025-10".parse().unwrap()],
        };

        let json = serde_json::to_string(&projection).unwrap();
        assert!(json.contains("\"from_months\":[\"2025-10\"]"));

        let back: PaymentProjection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, projection);
    }
}

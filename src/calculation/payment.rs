//! Payment-month projection.
//!
//! Complementary pay earned in a service month arrives in the bank one
//! month later. This module maps monthly financial results onto payment
//! months and combines them with the estimated normal payroll.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::config::default_normal_net;
use crate::models::{MonthlyFinancials, PaymentProjection, YearMonth};

/// Projects monthly net amounts onto their payment months.
///
/// Each service month pays out in the following calendar month (December
/// rolls into January of the next year). Several service months landing on
/// the same payment month accumulate; `from_months` records the sources.
///
/// The normal payroll estimate for a payment month is taken from
/// `normal_overrides` when the user has pinned a real value, otherwise from
/// the typical 12-entry table, otherwise from the fallback constant.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use nomina_engine::calculation::{calculate_month, project_payments};
/// use nomina_engine::config::{default_month_config, typical_normal_by_month};
/// use nomina_engine::models::YearMonth;
///
/// let december: YearMonth = "2025-12".parse().unwrap();
/// let mut financials = BTreeMap::new();
/// financials.insert(
///     december,
///     calculate_month(december, &[], &default_month_config()).unwrap(),
/// );
///
/// let payments = project_payments(&financials, &typical_normal_by_month(), &BTreeMap::new());
/// let january: YearMonth = "2026-01".parse().unwrap();
/// assert!(payments.contains_key(&january));
/// ```
pub fn project_payments(
    financials: &BTreeMap<YearMonth, MonthlyFinancials>,
    typical_normal: &BTreeMap<u32, Decimal>,
    normal_overrides: &BTreeMap<YearMonth, Decimal>,
) -> BTreeMap<YearMonth, PaymentProjection> {
    let mut payments: BTreeMap<YearMonth, PaymentProjection> = BTreeMap::new();

    for (service_month, monthly) in financials {
        let payment_month = service_month.next();
        let projection = payments.entry(payment_month).or_default();
        projection.complementary += monthly.net;
        projection.from_months.push(*service_month);
    }

    for (payment_month, projection) in &mut payments {
        projection.normal = normal_overrides
            .get(payment_month)
            .copied()
            .or_else(|| typical_normal.get(&payment_month.month()).copied())
            .unwrap_or_else(default_normal_net);
        projection.total = projection.normal + projection.complementary;
    }

    payments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_month;
    use crate::config::{default_month_config, typical_normal_by_month};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    /// A financial result with no events: net is fixed production minus
    /// deductions, enough to drive the projection arithmetic.
    fn empty_month(month: &str) -> MonthlyFinancials {
        calculate_month(ym(month), &[], &default_month_config()).unwrap()
    }

    #[test]
    fn test_service_month_pays_next_month() {
        let mut financials = BTreeMap::new();
        financials.insert(ym("2025-06"), empty_month("2025-06"));

        let payments =
            project_payments(&financials, &typical_normal_by_month(), &BTreeMap::new());

        assert_eq!(payments.len(), 1);
        let july = &payments[&ym("2025-07")];
        assert_eq!(july.from_months, vec![ym("2025-06")]);
    }

    #[test]
    fn test_december_pays_in_january_of_next_year() {
        let mut financials = BTreeMap::new();
        financials.insert(ym("2025-12"), empty_month("2025-12"));

        let payments =
            project_payments(&financials, &typical_normal_by_month(), &BTreeMap::new());
        assert!(payments.contains_key(&ym("2026-01")));
    }

    #[test]
    fn test_normal_comes_from_typical_table() {
        let mut financials = BTreeMap::new();
        financials.insert(ym("2025-10"), empty_month("2025-10"));

        let payments =
            project_payments(&financials, &typical_normal_by_month(), &BTreeMap::new());
        let november = &payments[&ym("2025-11")];

        assert_eq!(november.normal, dec("1561.30"));
        assert_eq!(november.total, november.normal + november.complementary);
    }

    #[test]
    fn test_override_wins_over_typical_table() {
        let mut financials = BTreeMap::new();
        financials.insert(ym("2025-10"), empty_month("2025-10"));

        let mut overrides = BTreeMap::new();
        overrides.insert(ym("2025-11"), dec("1600.00"));

        let payments = project_payments(&financials, &typical_normal_by_month(), &overrides);
        assert_eq!(payments[&ym("2025-11")].normal, dec("1600.00"));
    }

    #[test]
    fn test_fallback_constant_when_table_is_empty() {
        let mut financials = BTreeMap::new();
        financials.insert(ym("2025-10"), empty_month("2025-10"));

        let payments = project_payments(&financials, &BTreeMap::new(), &BTreeMap::new());
        assert_eq!(payments[&ym("2025-11")].normal, dec("1500.00"));
    }

    #[test]
    fn test_complementary_carries_service_month_net() {
        let mut financials = BTreeMap::new();
        let october = empty_month("2025-10");
        let expected_net = october.net;
        financials.insert(ym("2025-10"), october);

        let payments =
            project_payments(&financials, &typical_normal_by_month(), &BTreeMap::new());
        let november = &payments[&ym("2025-11")];

        assert_eq!(november.complementary, expected_net);
        assert_eq!(november.from_months, vec![ym("2025-10")]);
    }

    #[test]
    fn test_consecutive_service_months_pay_in_distinct_months() {
        let mut financials = BTreeMap::new();
        financials.insert(ym("2025-09"), empty_month("2025-09"));
        financials.insert(ym("2025-10"), empty_month("2025-10"));

        let payments =
            project_payments(&financials, &typical_normal_by_month(), &BTreeMap::new());

        assert_eq!(payments.len(), 2);
        assert!(payments.contains_key(&ym("2025-10")));
        assert!(payments.contains_key(&ym("2025-11")));
    }
}

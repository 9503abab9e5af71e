//! Effective month-configuration resolution.
//!
//! This module produces the [`MonthConfig`] for a given service month by
//! layering, in order: built-in defaults, the global tax-rate setting, the
//! shipped per-month calibration table, and user per-month overrides. Later
//! layers win; missing layers simply keep the prior value.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::YearMonth;

use super::types::{
    CalibrationOverride, ContributionBases, MonthConfig, MonthUserOverride, PayRates,
    SolidarityTranche,
};

/// Builds a tranche from cents of base and ten-thousandths of rate.
fn tranche(base_cents: i64, rate_ten_thousandths: i64) -> SolidarityTranche {
    SolidarityTranche {
        base: Decimal::new(base_cents, 2),
        rate: Decimal::new(rate_ten_thousandths, 4),
    }
}

/// Year-month key for the static calibration table.
fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).expect("static calibration month is valid")
}

/// The built-in default configuration (2025 calibration).
///
/// Every resolution starts from an owned copy of this template.
pub fn default_month_config() -> MonthConfig {
    MonthConfig {
        tax_rate: Decimal::new(35, 2),
        rates: PayRates {
            labor: Decimal::new(2707, 2),
            fest: Decimal::new(2947, 2),
            ca: Decimal::new(4711, 2),
            localized_factor: Decimal::new(5, 1),
        },
        fixed_production: Decimal::new(73342, 2),
        bases: ContributionBases {
            cc_base_worker: Decimal::new(215130, 2),
            cc_rate: Decimal::new(483, 4),
            fp_rate: Decimal::new(10, 4),
            solidarity: vec![tranche(49095, 77), tranche(156121, 83)],
        },
    }
}

/// The calibration overrides shipped with the engine.
///
/// These carry month-specific contribution data reconstructed from real
/// payslips and are applied underneath any user override.
pub fn builtin_calibration() -> BTreeMap<YearMonth, CalibrationOverride> {
    let mut table = BTreeMap::new();
    table.insert(
        ym(2025, 3),
        CalibrationOverride {
            cc_base_worker: None,
            solidarity: Some(vec![tranche(49095, 15), tranche(61430, 17)]),
        },
    );
    table.insert(
        ym(2025, 4),
        CalibrationOverride {
            cc_base_worker: None,
            solidarity: Some(vec![tranche(49095, 15), tranche(116964, 17)]),
        },
    );
    table.insert(
        ym(2025, 6),
        CalibrationOverride {
            cc_base_worker: Some(Decimal::new(209815, 2)),
            solidarity: Some(vec![tranche(49095, 15), tranche(135480, 17)]),
        },
    );
    table
}

/// The typical net normal-payroll amount per calendar month, in €.
pub fn typical_normal_by_month() -> BTreeMap<u32, Decimal> {
    let amounts: [(u32, i64); 12] = [
        (1, 1496_85),
        (2, 1534_05),
        (3, 1554_71),
        (4, 1575_86),
        (5, 1491_11),
        (6, 1377_95),
        (7, 1444_33),
        (8, 1451_42),
        (9, 1520_21),
        (10, 1557_66),
        (11, 1561_30),
        (12, 1545_01),
    ];
    amounts
        .into_iter()
        .map(|(month, cents)| (month, Decimal::new(cents, 2)))
        .collect()
}

/// Fallback normal-payroll estimate when no table entry or override exists.
pub fn default_normal_net() -> Decimal {
    Decimal::new(1500_00, 2)
}

/// Resolves the effective configuration for a service month.
///
/// Layering, later steps winning:
/// 1. built-in defaults ([`default_month_config`]),
/// 2. the global tax-rate percentage, if supplied,
/// 3. the calibration entry for this month (`cc_base_worker` and the
///    solidarity tranche sequence, each only if present; tranches replace
///    the whole sequence),
/// 4. the user override for this month (`irpf` and/or `prodFija`).
///
/// There are no error conditions: a missing override means "use the prior
/// layer's value". The result is fully owned.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use nomina_engine::config::{builtin_calibration, resolve};
/// use nomina_engine::models::YearMonth;
/// use rust_decimal::Decimal;
///
/// let october = YearMonth::new(2025, 10).unwrap();
/// let config = resolve(
///     october,
///     Some(Decimal::new(350, 1)), // 35.0%
///     &builtin_calibration(),
///     &BTreeMap::new(),
/// );
/// assert_eq!(config.tax_rate, Decimal::new(35, 2));
/// assert_eq!(config.rates.ca, Decimal::new(4711, 2));
/// ```
pub fn resolve(
    month: YearMonth,
    global_tax_percent: Option<Decimal>,
    calibration: &BTreeMap<YearMonth, CalibrationOverride>,
    user_overrides: &BTreeMap<YearMonth, MonthUserOverride>,
) -> MonthConfig {
    let mut config = default_month_config();

    if let Some(percent) = global_tax_percent {
        config.tax_rate = percent / Decimal::ONE_HUNDRED;
    }

    if let Some(patch) = calibration.get(&month) {
        if let Some(base) = patch.cc_base_worker {
            config.bases.cc_base_worker = base;
        }
        if let Some(tranches) = &patch.solidarity {
            config.bases.solidarity = tranches.clone();
        }
    }

    if let Some(user) = user_overrides.get(&month) {
        if let Some(tax_rate) = user.irpf {
            config.tax_rate = tax_rate;
        }
        if let Some(fixed_production) = user.prod_fija {
            config.fixed_production = fixed_production;
        }
    }

    config
}

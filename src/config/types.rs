//! Configuration types for monthly payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that the
//! resolver layers into an effective per-month [`MonthConfig`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hourly pay rates and the localized on-call factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRates {
    /// €/hour for ordinary workday hours.
    pub labor: Decimal,
    /// €/hour for festive workday hours.
    pub fest: Decimal,
    /// €/hour for continuity-of-care hours.
    pub ca: Decimal,
    /// Localized on-call hours pay `labor * localized_factor`.
    pub localized_factor: Decimal,
}

/// One solidarity (MEI) contribution bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidarityTranche {
    /// The contribution base for this bracket, in €.
    pub base: Decimal,
    /// The contribution rate applied to `base`.
    pub rate: Decimal,
}

/// Contribution bases and rates for the deduction side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionBases {
    /// Worker-side common-contingencies base, in €.
    pub cc_base_worker: Decimal,
    /// Common-contingencies rate applied to `cc_base_worker`.
    pub cc_rate: Decimal,
    /// Professional-training rate applied to `cc_base_worker`.
    pub fp_rate: Decimal,
    /// Ordered solidarity tranches; their `base × rate` products are summed.
    pub solidarity: Vec<SolidarityTranche>,
}

/// The effective configuration for one service month.
///
/// Produced by [`crate::config::resolve`]; an owned copy with no references
/// back into the default or override tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthConfig {
    /// Income-tax withholding rate, as a fraction in `[0, 1]`.
    pub tax_rate: Decimal,
    /// Hourly pay rates.
    pub rates: PayRates,
    /// Fixed production complement, accrued once per month, in €.
    pub fixed_production: Decimal,
    /// Contribution bases for deductions.
    pub bases: ContributionBases,
}

impl MonthConfig {
    /// The effective €/hour rate for localized on-call hours.
    pub fn localized_rate(&self) -> Decimal {
        self.rates.labor * self.rates.localized_factor
    }
}

/// A shipped calibration patch for a specific month.
///
/// Only the fields present are overwritten; the tranche sequence is replaced
/// wholesale, never merged tranche-by-tranche.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalibrationOverride {
    /// Replacement common-contingencies worker base, if calibrated.
    pub cc_base_worker: Option<Decimal>,
    /// Replacement solidarity tranche sequence, if calibrated.
    pub solidarity: Option<Vec<SolidarityTranche>>,
}

/// A user-edited per-month override.
///
/// Tax rate and fixed production are the only two fields exposed for manual
/// per-month editing. The serialized field names (`irpf`, `prodFija`) and
/// plain-number encoding are a compatibility contract with saved backups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthUserOverride {
    /// Replacement tax rate, as a fraction in `[0, 1]`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub irpf: Option<Decimal>,
    /// Replacement fixed production amount, in €.
    #[serde(
        rename = "prodFija",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub prod_fija: Option<Decimal>,
}

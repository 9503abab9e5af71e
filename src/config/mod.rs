//! Month configuration for the payroll calculation engine.
//!
//! Effective per-month configuration is derived on demand by layering the
//! built-in defaults, the global tax-rate setting, shipped calibration data,
//! and user per-month overrides.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use nomina_engine::config;
//! use nomina_engine::models::YearMonth;
//!
//! let month = YearMonth::new(2025, 10).unwrap();
//! let cfg = config::resolve(month, None, &config::builtin_calibration(), &BTreeMap::new());
//! assert!(cfg.tax_rate > rust_decimal::Decimal::ZERO);
//! ```

mod resolver;
mod types;

pub use resolver::{
    builtin_calibration, default_month_config, default_normal_net, resolve,
    typical_normal_by_month,
};
pub use types::{
    CalibrationOverride, ContributionBases, MonthConfig, MonthUserOverride, PayRates,
    SolidarityTranche,
};

//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod monthly;
mod shift_event;
mod year_month;

pub use monthly::{
    AccrualBreakdown, DeductionBreakdown, HourBreakdown, MonthlyAggregate, MonthlyFinancials,
    PaymentProjection, PayrollReport,
};
pub use shift_event::ShiftEvent;
pub use year_month::YearMonth;

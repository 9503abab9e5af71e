//! Shift-model registry.
//!
//! This module holds the fixed table mapping shift-type codes to their
//! hour-category contributions and display labels. The table is defined by
//! deployment; end users never edit it.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::HourBreakdown;

/// The registered shift-type codes.
///
/// These are the wire codes used in saved backups, so they are a
/// compatibility contract and stay in their original Spanish form.
pub mod codes {
    /// Afternoon continuity-of-care block, 5h CA.
    pub const TARDE: &str = "TARDE";
    /// Monday–Thursday guard, 17h.
    pub const G_LJ: &str = "G_LJ";
    /// Friday guard.
    pub const G_VIERNES: &str = "G_VIERNES";
    /// Saturday guard, 24h festive.
    pub const G_SABADO: &str = "G_SABADO";
    /// Sunday guard.
    pub const G_DOMINGO: &str = "G_DOMINGO";
    /// Reinforcement block, CA plus localized on-call.
    pub const REFUERZO: &str = "REFUERZO";
    /// Mixed 24h guard, 8h labor / 16h festive.
    pub const G_24_MIX: &str = "G_24_MIX";
}

/// All registered codes, in display order.
pub const SHIFT_TYPE_CODES: [&str; 7] = [
    codes::TARDE,
    codes::G_LJ,
    codes::G_VIERNES,
    codes::G_SABADO,
    codes::G_DOMINGO,
    codes::REFUERZO,
    codes::G_24_MIX,
];

/// A registered shift type: its code, display label, and hour model.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftModel {
    /// The shift-type code.
    pub code: &'static str,
    /// Human-readable label for display.
    pub label: &'static str,
    /// The hours this shift contributes to each pay category.
    pub hours: HourBreakdown,
}

/// Builds an hour breakdown from tenths of an hour.
fn hours(ca: i64, labor: i64, fest: i64, localized: i64) -> HourBreakdown {
    HourBreakdown {
        ca: Decimal::new(ca, 1),
        labor: Decimal::new(labor, 1),
        fest: Decimal::new(fest, 1),
        localized: Decimal::new(localized, 1),
    }
}

/// Looks up a shift type by its code.
///
/// # Errors
///
/// Returns [`PayrollError::UnknownShiftType`] if the code is not registered.
/// Callers must never substitute zero hours for an unknown type.
///
/// # Example
///
/// ```
/// use nomina_engine::registry::{codes, shift_model};
/// use rust_decimal::Decimal;
///
/// let model = shift_model(codes::G_LJ).unwrap();
/// assert_eq!(model.hours.ca, Decimal::new(50, 1)); // 5.0
/// assert_eq!(model.hours.labor, Decimal::new(120, 1)); // 12.0
///
/// assert!(shift_model("G_NOCHE").is_err());
/// ```
pub fn shift_model(code: &str) -> PayrollResult<ShiftModel> {
    let (code, label, hours) = match code {
        codes::TARDE => (codes::TARDE, "Tarde (5h CA)", hours(50, 0, 0, 0)),
        codes::G_LJ => (codes::G_LJ, "Guardia L-J (17h)", hours(50, 120, 0, 0)),
        codes::G_VIERNES => (codes::G_VIERNES, "Guardia Viernes", hours(50, 40, 80, 0)),
        codes::G_SABADO => (codes::G_SABADO, "Guardia Sábado (24h)", hours(0, 0, 240, 0)),
        codes::G_DOMINGO => (codes::G_DOMINGO, "Guardia Domingo", hours(0, 80, 160, 0)),
        codes::REFUERZO => (codes::REFUERZO, "Refuerzo (CA+Loc)", hours(75, 0, 0, 100)),
        codes::G_24_MIX => (
            codes::G_24_MIX,
            "G. 24h Mixta (8 Lab/16 Fest)",
            hours(50, 80, 160, 0),
        ),
        _ => {
            return Err(PayrollError::UnknownShiftType {
                code: code.to_string(),
            });
        }
    };
    Ok(ShiftModel { code, label, hours })
}

/// Returns the display label for a shift-type code.
pub fn shift_label(code: &str) -> PayrollResult<&'static str> {
    shift_model(code).map(|model| model.label)
}

/// Returns every registered shift model, in display order.
pub fn all_shift_models() -> Vec<ShiftModel> {
    SHIFT_TYPE_CODES
        .iter()
        .filter_map(|code| shift_model(code).ok())
        .collect()
}

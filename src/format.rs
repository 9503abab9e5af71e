//! Display-time rounding and euro formatting.
//!
//! All calculation happens in full decimal precision; this module is the
//! only place amounts are rounded, and only for presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to 2 decimals, half away from zero.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount in the Spanish locale: `2.345,13 €`.
///
/// # Example
///
/// ```
/// use nomina_engine::format::format_euro;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_euro(Decimal::new(234513, 2)), "2.345,13 €");
/// assert_eq!(format_euro(Decimal::new(-9950, 2)), "-99,50 €");
/// ```
pub fn format_euro(amount: Decimal) -> String {
    let rounded = round_display(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(text.len() + 4);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction} €")
}

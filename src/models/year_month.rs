//! Year-month keys for service and payment months.
//!
//! This module defines the [`YearMonth`] value type used to key monthly
//! aggregates, financial results, and payment projections.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PayrollError, PayrollResult};

/// A calendar year-month, rendered as `"YYYY-MM"`.
///
/// `YearMonth` is ordered chronologically and serializes as its string form,
/// which makes it usable directly as a JSON map key in persisted session
/// state and in computed reports.
///
/// # Example
///
/// ```
/// use nomina_engine::models::YearMonth;
///
/// let december: YearMonth = "2025-12".parse().unwrap();
/// assert_eq!(december.to_string(), "2025-12");
/// assert_eq!(december.next().to_string(), "2026-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`, validating the month number.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidDate`] if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> PayrollResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::InvalidDate {
                value: format!("{year:04}-{month:02}"),
                message: "month must be between 01 and 12".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the year-month a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the following calendar month, rolling December into January
    /// of the next year.
    ///
    /// Complementary pay earned in a service month is disbursed in the next
    /// month, so this is also the service-month → payment-month mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use nomina_engine::models::YearMonth;
    ///
    /// let june = YearMonth::new(2025, 6).unwrap();
    /// assert_eq!(june.next(), YearMonth::new(2025, 7).unwrap());
    ///
    /// let december = YearMonth::new(2025, 12).unwrap();
    /// assert_eq!(december.next(), YearMonth::new(2026, 1).unwrap());
    /// ```
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| PayrollError::InvalidDate {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (year_str, month_str) = s.split_once('-').ok_or_else(|| invalid("expected YYYY-MM"))?;
        let year: i32 = year_str
            .parse()
            .map_err(|_| invalid("year is not a number"))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_and_display_round_trip() {
        let ym: YearMonth = "2025-06".parse().unwrap();
        assert_eq!(ym.year(), 2025);
        assert_eq!(ym.month(), 6);
        assert_eq!(ym.to_string(), "2025-06");
    }

    #[test]
    fn test_from_date_takes_year_month_prefix() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 7).unwrap();
        assert_eq!(YearMonth::from_date(date).to_string(), "2025-10");
    }

    #[test]
    fn test_next_within_year() {
        let june: YearMonth = "2025-06".parse().unwrap();
        assert_eq!(june.next().to_string(), "2025-07");
    }

    #[test]
    fn test_next_rolls_december_into_new_year() {
        let december: YearMonth = "2025-12".parse().unwrap();
        assert_eq!(december.next().to_string(), "2026-01");
    }

    #[test]
    fn test_month_out_of_range_is_invalid() {
        let result = YearMonth::new(2025, 13);
        assert!(matches!(result, Err(PayrollError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("202506".parse::<YearMonth>().is_err());
        assert!("2025-xx".parse::<YearMonth>().is_err());
        assert!("2025-00".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a: YearMonth = "2024-12".parse().unwrap();
        let b: YearMonth = "2025-01".parse().unwrap();
        let c: YearMonth = "2025-02".parse().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_serializes_as_json_map_key() {
        let mut map = BTreeMap::new();
        map.insert("2025-10".parse::<YearMonth>().unwrap(), 1);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "{\"2025-10\":1}");

        let back: BTreeMap<YearMonth, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}

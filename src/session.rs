//! Persisted session state owned by the host application.
//!
//! The engine itself is stateless; this module defines the plain-data
//! structure the host loads at start and saves on demand. Its serialized
//! layout (`acts`, `month_configs`, `normal_overrides`, `global_irpf`, with
//! monetary values as plain JSON numbers) is a compatibility contract with
//! existing saved backups.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::config::MonthUserOverride;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ShiftEvent, YearMonth};

/// Serialization of the normal-overrides map with plain-number values.
mod euro_map {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::ser::{Error as _, SerializeMap};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::YearMonth;

    pub fn serialize<S>(
        map: &BTreeMap<YearMonth, Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (month, amount) in map {
            let amount = amount
                .to_f64()
                .ok_or_else(|| S::Error::custom("amount out of float range"))?;
            out.serialize_entry(month, &amount)?;
        }
        out.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<YearMonth, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decimal's deserializer accepts plain JSON numbers as well as strings.
        BTreeMap::deserialize(deserializer)
    }
}

fn default_global_irpf() -> Decimal {
    Decimal::new(350, 1)
}

/// The complete session state: shift events plus user configuration.
///
/// All entities are value data; the engine never retains references to this
/// structure between calls.
///
/// # Example
///
/// ```
/// use nomina_engine::session::SessionState;
///
/// let state = SessionState::default();
/// assert!(state.acts.is_empty());
/// assert_eq!(state.global_irpf, rust_decimal::Decimal::new(350, 1)); // 35.0%
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The unordered shift-event collection.
    #[serde(default)]
    pub acts: Vec<ShiftEvent>,
    /// User per-month overrides, keyed by service month.
    #[serde(default)]
    pub month_configs: BTreeMap<YearMonth, MonthUserOverride>,
    /// User normal-payroll overrides, keyed by payment month, in €.
    #[serde(default, with = "euro_map")]
    pub normal_overrides: BTreeMap<YearMonth, Decimal>,
    /// The global default income-tax rate, as a percentage.
    #[serde(
        default = "default_global_irpf",
        with = "rust_decimal::serde::float"
    )]
    pub global_irpf: Decimal,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            acts: Vec::new(),
            month_configs: BTreeMap::new(),
            normal_overrides: BTreeMap::new(),
            global_irpf: default_global_irpf(),
        }
    }
}

/// Reads one top-level backup key, falling back to `None` when the key is
/// missing or cannot be decoded.
fn recover_key<T: DeserializeOwned>(value: Option<Value>, key: &str) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            warn!(key, %error, "discarding unreadable backup key");
            None
        }
    }
}

impl SessionState {
    /// Loads a session from a backup blob.
    ///
    /// Recovery is per key: a missing or unreadable top-level key falls back
    /// to its default independently, so a partially damaged backup still
    /// restores everything else.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::MalformedBackup`] only when the blob is not a
    /// JSON object at all.
    pub fn from_json(data: &str) -> PayrollResult<Self> {
        let value: Value =
            serde_json::from_str(data).map_err(|error| PayrollError::MalformedBackup {
                message: error.to_string(),
            })?;
        let Value::Object(mut fields) = value else {
            return Err(PayrollError::MalformedBackup {
                message: "expected a JSON object at the top level".to_string(),
            });
        };

        let mut state = Self::default();
        if let Some(acts) = recover_key(fields.remove("acts"), "acts") {
            state.acts = acts;
        }
        if let Some(month_configs) = recover_key(fields.remove("month_configs"), "month_configs") {
            state.month_configs = month_configs;
        }
        if let Some(normal_overrides) =
            recover_key(fields.remove("normal_overrides"), "normal_overrides")
        {
            state.normal_overrides = normal_overrides;
        }
        if let Some(global_irpf) = recover_key(fields.remove("global_irpf"), "global_irpf") {
            state.global_irpf = global_irpf;
        }
        Ok(state)
    }

    /// Serializes the session in the backup layout.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::MalformedBackup`] if the state cannot be
    /// encoded (an amount outside the float range).
    pub fn to_json(&self) -> PayrollResult<String> {
        serde_json::to_string_pretty(self).map_err(|error| PayrollError::MalformedBackup {
            message: error.to_string(),
        })
    }

    /// Appends a shift event.
    pub fn add_act(&mut self, event: ShiftEvent) {
        self.acts.push(event);
    }

    /// Removes the event with the given id. Returns whether one was removed.
    pub fn remove_act(&mut self, id: &str) -> bool {
        let before = self.acts.len();
        self.acts.retain(|act| act.id != id);
        self.acts.len() != before
    }

    /// Removes every shift event.
    pub fn clear_acts(&mut self) {
        self.acts.clear();
    }

    /// Stores a per-month user override, replacing any existing one.
    pub fn set_month_override(&mut self, month: YearMonth, patch: MonthUserOverride) {
        self.month_configs.insert(month, patch);
    }

    /// Pins the real normal-payroll net for a payment month.
    pub fn set_normal_override(&mut self, payment_month: YearMonth, amount: Decimal) {
        self.normal_overrides.insert(payment_month, amount);
    }

    /// Drops the pinned normal-payroll net for a payment month, returning to
    /// the typical-table estimate. Returns whether an override existed.
    pub fn clear_normal_override(&mut self, payment_month: &YearMonth) -> bool {
        self.normal_overrides.remove(payment_month).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::codes;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn sample_state() -> SessionState {
        let mut state = SessionState::default();
        state.add_act(ShiftEvent::new(
            NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
            codes::G_VIERNES,
        ));
        state.add_act(ShiftEvent::new(
            NaiveDate::from_ymd_opt(2025, 10, 7).unwrap(),
            codes::G_24_MIX,
        ));
        state.set_month_override(
            ym("2025-10"),
            MonthUserOverride {
                irpf: Some(dec("0.32")),
                prod_fija: None,
            },
        );
        state.set_normal_override(ym("2025-11"), dec("1602.44"));
        state.global_irpf = dec("34.5");
        state
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let state = sample_state();
        let json = state.to_json().unwrap();
        let restored = SessionState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_backup_layout_uses_legacy_field_names() {
        let json = sample_state().to_json().unwrap();
        for key in ["\"acts\"", "\"month_configs\"", "\"normal_overrides\"", "\"global_irpf\""] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
        // Monetary values are plain numbers, not strings.
        assert!(json.contains("\"2025-11\": 1602.44"));
        assert!(json.contains("\"global_irpf\": 34.5"));
    }

    #[test]
    fn test_loads_legacy_backup_with_plain_numbers() {
        let json = r#"{
            "acts": [
                {"id": "a1", "date": "2025-10-07", "type": "G_24_MIX", "special": true}
            ],
            "month_configs": {
                "2025-10": {"irpf": 0.32, "prodFija": 733.42}
            },
            "normal_overrides": {"2025-11": 1602.44},
            "global_irpf": 35.0
        }"#;

        let state = SessionState::from_json(json).unwrap();
        assert_eq!(state.acts.len(), 1);
        assert_eq!(state.acts[0].shift_type, "G_24_MIX");
        assert_eq!(state.month_configs[&ym("2025-10")].irpf, Some(dec("0.32")));
        assert_eq!(state.normal_overrides[&ym("2025-11")], dec("1602.44"));
        assert_eq!(state.global_irpf, dec("35.0"));
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let state = SessionState::from_json("{}").unwrap();
        assert!(state.acts.is_empty());
        assert!(state.month_configs.is_empty());
        assert!(state.normal_overrides.is_empty());
        assert_eq!(state.global_irpf, dec("35.0"));
    }

    #[test]
    fn test_unreadable_key_recovers_independently() {
        // acts is garbage; the rest of the backup must still load.
        let json = r#"{
            "acts": "not-a-list",
            "normal_overrides": {"2025-11": 1500.0},
            "global_irpf": 28.0
        }"#;

        let state = SessionState::from_json(json).unwrap();
        assert!(state.acts.is_empty());
        assert_eq!(state.normal_overrides[&ym("2025-11")], dec("1500.0"));
        assert_eq!(state.global_irpf, dec("28.0"));
    }

    #[test]
    fn test_non_object_blob_is_malformed() {
        let result = SessionState::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(PayrollError::MalformedBackup { .. })));

        let result = SessionState::from_json("not json at all");
        assert!(matches!(result, Err(PayrollError::MalformedBackup { .. })));
    }

    #[test]
    fn test_remove_act_by_id() {
        let mut state = sample_state();
        let id = state.acts[0].id.clone();

        assert!(state.remove_act(&id));
        assert_eq!(state.acts.len(), 1);
        assert!(!state.remove_act(&id));
    }

    #[test]
    fn test_clear_acts_keeps_configuration() {
        let mut state = sample_state();
        state.clear_acts();
        assert!(state.acts.is_empty());
        assert!(!state.month_configs.is_empty());
        assert!(!state.normal_overrides.is_empty());
    }

    #[test]
    fn test_clear_normal_override() {
        let mut state = sample_state();
        assert!(state.clear_normal_override(&ym("2025-11")));
        assert!(!state.clear_normal_override(&ym("2025-11")));
    }
}

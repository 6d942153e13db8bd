//! Key/value messages exchanged between the settings page and the watch.

use crate::error::{SettingsError, SettingsErrorExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One value in a settings message.
///
/// Toggles arrive as integers from the phone (`1` on, anything else off); booleans are
/// accepted as well so hand-written payloads stay readable. Any other JSON value is
/// kept as is and only rejected when it lands on a key the watch understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TupleValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Other(Value),
}

impl TupleValue {
    /// Reads the value as a toggle state.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidValue`] for anything but an integer or boolean.
    pub fn as_switch(&self, key: &str) -> Result<bool, SettingsError> {
        let found = match self {
            Self::Bool(on) => return Ok(*on),
            Self::Int(raw) => return Ok(*raw == 1),
            Self::Text(text) => format!("text '{text}'"),
            Self::Other(Value::Null) => "null".to_owned(),
            Self::Other(Value::Number(number)) => format!("number {number}"),
            Self::Other(Value::Array(_)) => "an array".to_owned(),
            Self::Other(other) => format!("{other}"),
        };
        Err(SettingsError::InvalidValue {
            key: key.to_owned(),
            message: format!("expected an integer or boolean, found {found}").into(),
            context: None,
        })
    }
}

impl From<bool> for TupleValue {
    fn from(on: bool) -> Self {
        Self::Int(i64::from(on))
    }
}

/// A settings message keyed by `messageKey`, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsMessage(BTreeMap<String, TupleValue>);

impl SettingsMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"show_am_pm": 1, "show_weekday": false}`.
    ///
    /// # Errors
    /// Returns [`SettingsError::Json`] if the text is not such an object.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).context("Parsing settings message")
    }

    /// # Errors
    /// Returns [`SettingsError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(SettingsError::from)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TupleValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TupleValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TupleValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<TupleValue>> FromIterator<(K, V)> for SettingsMessage {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_map_to_tuple_variants() {
        let message = SettingsMessage::from_json(
            r#"{"a": 1, "b": true, "c": "x", "d": 0, "e": 1.5, "f": null, "g": 4294967297}"#,
        )
        .unwrap();
        assert_eq!(message.get("a"), Some(&TupleValue::Int(1)));
        assert_eq!(message.get("b"), Some(&TupleValue::Bool(true)));
        assert_eq!(message.get("c"), Some(&TupleValue::Text("x".to_owned())));
        assert_eq!(message.get("e"), Some(&TupleValue::Other(json!(1.5))));
        assert_eq!(message.get("f"), Some(&TupleValue::Other(Value::Null)));
        assert_eq!(message.get("g"), Some(&TupleValue::Int(4_294_967_297)));
        assert_eq!(message.len(), 7);
    }

    #[test]
    fn nested_values_are_kept() {
        let message = SettingsMessage::from_json(r#"{"a": [1, 2], "b": {"c": 1}}"#).unwrap();
        assert_eq!(message.get("a"), Some(&TupleValue::Other(json!([1, 2]))));
        assert_eq!(message.get("b"), Some(&TupleValue::Other(json!({"c": 1}))));
    }

    #[test]
    fn only_one_counts_as_on() {
        assert!(TupleValue::Int(1).as_switch("k").unwrap());
        assert!(!TupleValue::Int(0).as_switch("k").unwrap());
        assert!(!TupleValue::Int(2).as_switch("k").unwrap());
        assert!(!TupleValue::Int(-1).as_switch("k").unwrap());
        assert!(!TupleValue::Int(4_294_967_297).as_switch("k").unwrap());
        assert!(TupleValue::Bool(true).as_switch("k").unwrap());
    }

    #[test]
    fn text_is_not_a_switch() {
        let err = TupleValue::Text("on".to_owned()).as_switch("show_am_pm").unwrap_err();
        assert!(matches!(&err, SettingsError::InvalidValue { key, .. } if key == "show_am_pm"));
    }

    #[test]
    fn null_and_floats_are_not_switches() {
        let err = TupleValue::Other(Value::Null).as_switch("show_am_pm").unwrap_err();
        assert!(err.to_string().ends_with("found null"));

        let err = TupleValue::Other(json!(1.0)).as_switch("show_am_pm").unwrap_err();
        assert!(err.to_string().ends_with("found number 1.0"));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = SettingsMessage::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, SettingsError::Json { context: Some(_), .. }));
    }

    #[test]
    fn booleans_are_sent_as_integers() {
        let message: SettingsMessage = [("on", true), ("off", false)].into_iter().collect();
        assert_eq!(message.to_json().unwrap(), r#"{"off":0,"on":1}"#);
    }
}

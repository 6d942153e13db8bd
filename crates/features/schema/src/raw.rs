//! Untyped descriptors as they appear in a schema file, before validation.

use serde::Deserialize;
use serde_json::Value;

pub const KEY_TYPE: &str = "type";
pub const KEY_MESSAGE_KEY: &str = "messageKey";
pub const KEY_LABEL: &str = "label";
pub const KEY_DEFAULT_VALUE: &str = "defaultValue";
pub const KEY_ITEMS: &str = "items";

/// One descriptor with every known key optional.
///
/// Keys the schema does not know about (`description`, `attributes`, ...) are ignored;
/// known keys on the wrong type are rejected during validation. A JSON `null` counts as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDescriptor {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message_key: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub items: Option<Vec<RawDescriptor>>,
}

impl RawDescriptor {
    /// Keys present on this descriptor, excluding `type`.
    pub(crate) fn present_keys(&self) -> impl Iterator<Item = &'static str> {
        [
            (KEY_MESSAGE_KEY, self.message_key.is_some()),
            (KEY_LABEL, self.label.is_some()),
            (KEY_DEFAULT_VALUE, self.default_value.is_some()),
            (KEY_ITEMS, self.items.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
    }
}

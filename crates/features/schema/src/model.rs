//! Typed descriptors of a validated settings page.
//!
//! Serialization produces the shape the form-rendering host reads: a `type` tag followed
//! by `messageKey`, `label`, `defaultValue` or `items` as the type requires. Parsing goes
//! through [`crate::validator`] instead of a derived `Deserialize`, so bad input yields a
//! [`crate::SchemaError`] rather than a generic serde message.

use serde::Serialize;
use wfh_domain::field::FieldType;

/// A top-level entry of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Descriptor {
    Section(Section),
    Submit(Submit),
}

impl Descriptor {
    #[must_use]
    pub const fn kind(&self) -> FieldType {
        match self {
            Self::Section(_) => FieldType::Section,
            Self::Submit(_) => FieldType::Submit,
        }
    }

    #[must_use]
    pub const fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::Submit(_) => None,
        }
    }

    #[must_use]
    pub const fn as_submit(&self) -> Option<&Submit> {
        match self {
            Self::Submit(submit) => Some(submit),
            Self::Section(_) => None,
        }
    }
}

/// A group of fields rendered together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub items: Vec<Field>,
}

impl Section {
    #[must_use]
    pub const fn new(items: Vec<Field>) -> Self {
        Self { items }
    }

    pub fn toggles(&self) -> impl Iterator<Item = &Toggle> {
        self.items.iter().filter_map(Field::as_toggle)
    }
}

/// An entry nested inside a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    Heading(Heading),
    Toggle(Toggle),
}

impl Field {
    #[must_use]
    pub const fn kind(&self) -> FieldType {
        match self {
            Self::Heading(_) => FieldType::Heading,
            Self::Toggle(_) => FieldType::Toggle,
        }
    }

    #[must_use]
    pub const fn as_toggle(&self) -> Option<&Toggle> {
        match self {
            Self::Toggle(toggle) => Some(toggle),
            Self::Heading(_) => None,
        }
    }
}

/// Static heading text; `defaultValue` holds the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    #[serde(rename = "defaultValue")]
    pub text: String,
}

impl Heading {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A boolean switch bound to a device setting through its `messageKey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
    pub message_key: String,
    pub label: String,
    pub default_value: bool,
}

impl Toggle {
    pub fn new(message_key: impl Into<String>, label: impl Into<String>, default_value: bool) -> Self {
        Self { message_key: message_key.into(), label: label.into(), default_value }
    }
}

/// The button that sends the form back to the device; `defaultValue` is its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submit {
    #[serde(rename = "defaultValue")]
    pub caption: String,
}

impl Submit {
    pub fn new(caption: impl Into<String>) -> Self {
        Self { caption: caption.into() }
    }
}

impl From<Section> for Descriptor {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl From<Submit> for Descriptor {
    fn from(submit: Submit) -> Self {
        Self::Submit(submit)
    }
}

impl From<Heading> for Field {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}

impl From<Toggle> for Field {
    fn from(toggle: Toggle) -> Self {
        Self::Toggle(toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_serializes_in_host_shape() {
        let field = Field::from(Toggle::new("show_weekday", "Replace month with weekday", false));
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "toggle",
                "messageKey": "show_weekday",
                "label": "Replace month with weekday",
                "defaultValue": false
            })
        );
    }

    #[test]
    fn section_nests_items_under_type_tag() {
        let section = Descriptor::from(Section::new(vec![Heading::new("Appearance").into()]));
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({ "type": "section", "items": [{ "type": "heading", "defaultValue": "Appearance" }] })
        );
    }

    #[test]
    fn accessors_match_variants() {
        let submit = Descriptor::from(Submit::new("Save Settings"));
        assert_eq!(submit.kind(), FieldType::Submit);
        assert!(submit.as_section().is_none());
        assert_eq!(submit.as_submit().map(|s| s.caption.as_str()), Some("Save Settings"));
    }
}

//! # Settings Schema
//!
//! The settings page of the Hellboy watchface, described as data. A form-rendering host
//! reads the document and draws the page; each toggle's `messageKey` names the setting
//! its value is sent back to the watch under.
//!
//! ## Architecture
//!
//! 1.  **Model ([`model`]):** typed descriptors. A document is a list of top-level
//!     [`Descriptor`]s (sections and the submit button); sections hold [`Field`]s
//!     (headings and toggles).
//! 2.  **Validation ([`validator`]):** raw JSON descriptors are checked and lowered into
//!     the typed model. Anything malformed fails with [`SchemaError`].
//! 3.  **Built-in document ([`document`]):** the page shipped with the watchface,
//!     built once and shared.
//!
//! ## Example
//!
//! ```rust
//! use wfh_schema::{SchemaDocument, hellboy_document};
//!
//! let json = hellboy_document().to_json().unwrap();
//! let reloaded = SchemaDocument::from_json(&json).unwrap();
//! assert_eq!(&reloaded, hellboy_document());
//! ```

pub mod document;
mod error;
pub mod model;
pub mod raw;
pub mod validator;

pub use crate::document::hellboy_document;
pub use crate::error::{SchemaError, SchemaErrorExt};
pub use crate::model::{Descriptor, Field, Heading, Section, Submit, Toggle};
pub use crate::raw::RawDescriptor;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A validated, immutable settings page.
///
/// Serializes as the JSON array the host consumes; deserializing runs the full
/// validation, so a `SchemaDocument` value always upholds the schema invariants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<RawDescriptor>")]
pub struct SchemaDocument {
    descriptors: Vec<Descriptor>,
}

impl SchemaDocument {
    /// Builds a document from typed descriptors, checking the document invariants.
    ///
    /// # Errors
    /// See [`validator::check_descriptors`].
    pub fn new(descriptors: Vec<Descriptor>) -> Result<Self, SchemaError> {
        validator::check_descriptors(&descriptors)?;
        Ok(Self { descriptors })
    }

    /// Parses and validates a schema from its JSON text.
    ///
    /// # Errors
    /// Returns [`SchemaError::Json`] if the text is not an array of descriptor objects,
    /// otherwise any error from [`validator::validate_document`].
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: Vec<RawDescriptor> =
            serde_json::from_str(json).context("Parsing schema document")?;
        validator::validate_document(&raw)
    }

    /// Same as [`SchemaDocument::from_json`] for an already parsed JSON value.
    ///
    /// # Errors
    /// See [`SchemaDocument::from_json`].
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let raw: Vec<RawDescriptor> =
            serde_json::from_value(value).context("Reading schema document")?;
        validator::validate_document(&raw)
    }

    /// Serializes the document to compact JSON.
    ///
    /// # Errors
    /// Returns [`SchemaError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(SchemaError::from)
    }

    /// Serializes the document to indented JSON.
    ///
    /// # Errors
    /// Returns [`SchemaError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(SchemaError::from)
    }

    /// # Errors
    /// Returns [`SchemaError::Json`] if serialization fails.
    pub fn to_value(&self) -> Result<Value, SchemaError> {
        serde_json::to_value(self).map_err(SchemaError::from)
    }

    /// Top-level descriptors in display order.
    #[must_use]
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.descriptors.iter().filter_map(Descriptor::as_section)
    }

    /// Every field of every section, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections().flat_map(|section| section.items.iter())
    }

    pub fn toggles(&self) -> impl Iterator<Item = &Toggle> {
        self.sections().flat_map(Section::toggles)
    }

    /// The toggle bound to `message_key`, if any.
    #[must_use]
    pub fn toggle(&self, message_key: &str) -> Option<&Toggle> {
        self.toggles().find(|toggle| toggle.message_key == message_key)
    }

    pub fn message_keys(&self) -> impl Iterator<Item = &str> {
        self.toggles().map(|toggle| toggle.message_key.as_str())
    }

    /// The submit button. Always present in a validated document.
    #[must_use]
    pub fn submit(&self) -> Option<&Submit> {
        self.descriptors.iter().find_map(Descriptor::as_submit)
    }

    /// Counts and keys, for reporting.
    #[must_use]
    pub fn summary(&self) -> SchemaSummary {
        let headings = self.fields().filter(|field| matches!(field, Field::Heading(_))).count();
        SchemaSummary {
            sections: self.sections().count(),
            headings,
            toggles: self.toggles().count(),
            message_keys: self.message_keys().map(str::to_owned).collect(),
            submit: self.submit().map(|submit| submit.caption.clone()),
        }
    }

    /// Wraps descriptors known to be valid, skipping the invariant pass in release builds.
    pub(crate) fn trusted(descriptors: Vec<Descriptor>) -> Self {
        debug_assert!(
            validator::check_descriptors(&descriptors).is_ok(),
            "built-in schema violates its invariants"
        );
        Self { descriptors }
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptors.serialize(serializer)
    }
}

impl TryFrom<Vec<RawDescriptor>> for SchemaDocument {
    type Error = SchemaError;

    fn try_from(raw: Vec<RawDescriptor>) -> Result<Self, Self::Error> {
        validator::validate_document(&raw)
    }
}

/// Shape of a document at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSummary {
    pub sections: usize,
    pub headings: usize,
    pub toggles: usize,
    pub message_keys: Vec<String>,
    pub submit: Option<String>,
}

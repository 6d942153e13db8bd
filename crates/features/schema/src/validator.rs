//! # Schema Validation
//!
//! Turns untyped descriptors into a [`SchemaDocument`], failing fast with a descriptive
//! [`SchemaError`]. Validation runs in two passes:
//! 1. **Shape**: every descriptor has a recognized `type` at the right nesting level,
//!    carries the keys its type requires with values of the right JSON type, and no
//!    keys that belong to other types.
//! 2. **Invariants**: toggle `messageKey`s are non-empty and pairwise distinct, and the
//!    document has exactly one submit button.

use crate::error::SchemaError;
use crate::model::{Descriptor, Field, Heading, Section, Submit, Toggle};
use crate::raw::{KEY_DEFAULT_VALUE, KEY_ITEMS, KEY_LABEL, KEY_MESSAGE_KEY, KEY_TYPE, RawDescriptor};
use crate::SchemaDocument;
use fxhash::FxHashMap;
use serde_json::Value;
use tracing::debug;
use wfh_domain::field::FieldType;

/// Validates raw descriptors and builds the typed document.
///
/// # Errors
/// * [`SchemaError::UnknownType`] / [`SchemaError::Misplaced`] for an unrecognized or
///   wrongly nested `type`.
/// * [`SchemaError::MissingKey`], [`SchemaError::UnexpectedKey`] and
///   [`SchemaError::InvalidValue`] for per-type key violations.
/// * [`SchemaError::DuplicateMessageKey`] and [`SchemaError::Structure`] from
///   [`check_descriptors`].
pub fn validate_document(raw: &[RawDescriptor]) -> Result<SchemaDocument, SchemaError> {
    let descriptors = raw
        .iter()
        .enumerate()
        .map(|(index, descriptor)| lower_top_level(descriptor, &format!("[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let document = SchemaDocument::new(descriptors)?;
    debug!(
        descriptors = document.descriptors().len(),
        toggles = document.toggles().count(),
        "Schema document validated"
    );
    Ok(document)
}

/// Checks the invariants of already-typed descriptors.
///
/// # Errors
/// * [`SchemaError::InvalidValue`] for an empty `messageKey`.
/// * [`SchemaError::DuplicateMessageKey`] when two toggles share a key.
/// * [`SchemaError::Structure`] unless exactly one submit button is present.
pub fn check_descriptors(descriptors: &[Descriptor]) -> Result<(), SchemaError> {
    let mut seen: FxHashMap<&str, String> = FxHashMap::default();
    let mut submits = 0usize;

    for (index, descriptor) in descriptors.iter().enumerate() {
        let section = match descriptor {
            Descriptor::Submit(_) => {
                submits += 1;
                continue;
            },
            Descriptor::Section(section) => section,
        };

        for (position, field) in section.items.iter().enumerate() {
            let Field::Toggle(toggle) = field else { continue };
            let path = format!("[{index}].items[{position}]");

            if toggle.message_key.trim().is_empty() {
                return Err(SchemaError::InvalidValue {
                    key: KEY_MESSAGE_KEY,
                    path,
                    message: "must not be empty".into(),
                    context: None,
                });
            }

            if let Some(first) = seen.get(toggle.message_key.as_str()) {
                return Err(SchemaError::DuplicateMessageKey {
                    key: toggle.message_key.clone(),
                    path,
                    first: first.clone(),
                    context: None,
                });
            }
            seen.insert(toggle.message_key.as_str(), path);
        }
    }

    match submits {
        1 => Ok(()),
        0 => Err(SchemaError::Structure {
            message: "document has no submit button".into(),
            context: None,
        }),
        n => Err(SchemaError::Structure {
            message: format!("document has {n} submit buttons, expected one").into(),
            context: None,
        }),
    }
}

fn lower_top_level(raw: &RawDescriptor, path: &str) -> Result<Descriptor, SchemaError> {
    let kind = parse_kind(raw, path)?;
    match kind {
        FieldType::Section => {
            reject_foreign_keys(raw, kind, path, &[KEY_ITEMS])?;
            let items = raw.items.as_deref().ok_or_else(|| missing(KEY_ITEMS, path))?;
            let fields = items
                .iter()
                .enumerate()
                .map(|(position, item)| lower_field(item, &format!("{path}.items[{position}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Section::new(fields).into())
        },
        FieldType::Submit => {
            reject_foreign_keys(raw, kind, path, &[KEY_DEFAULT_VALUE])?;
            Ok(Submit::new(text_default(raw, path)?).into())
        },
        FieldType::Heading | FieldType::Toggle => Err(misplaced(kind, path)),
    }
}

fn lower_field(raw: &RawDescriptor, path: &str) -> Result<Field, SchemaError> {
    let kind = parse_kind(raw, path)?;
    match kind {
        FieldType::Heading => {
            reject_foreign_keys(raw, kind, path, &[KEY_DEFAULT_VALUE])?;
            Ok(Heading::new(text_default(raw, path)?).into())
        },
        FieldType::Toggle => {
            reject_foreign_keys(raw, kind, path, &[KEY_MESSAGE_KEY, KEY_LABEL, KEY_DEFAULT_VALUE])?;
            let message_key =
                raw.message_key.clone().ok_or_else(|| missing(KEY_MESSAGE_KEY, path))?;
            let label = raw.label.clone().ok_or_else(|| missing(KEY_LABEL, path))?;
            let default_value = match required_default(raw, path)? {
                Value::Bool(value) => *value,
                other => return Err(wrong_default(path, "a boolean", other)),
            };
            Ok(Toggle::new(message_key, label, default_value).into())
        },
        FieldType::Section | FieldType::Submit => Err(misplaced(kind, path)),
    }
}

fn parse_kind(raw: &RawDescriptor, path: &str) -> Result<FieldType, SchemaError> {
    let name = raw.kind.as_deref().ok_or_else(|| missing(KEY_TYPE, path))?;
    FieldType::parse(name).ok_or_else(|| SchemaError::UnknownType {
        found: name.to_owned(),
        path: path.to_owned(),
        context: None,
    })
}

fn reject_foreign_keys(
    raw: &RawDescriptor,
    kind: FieldType,
    path: &str,
    allowed: &[&'static str],
) -> Result<(), SchemaError> {
    match raw.present_keys().find(|key| !allowed.contains(key)) {
        Some(key) => Err(SchemaError::UnexpectedKey { key, kind, path: path.to_owned(), context: None }),
        None => Ok(()),
    }
}

fn required_default<'a>(raw: &'a RawDescriptor, path: &str) -> Result<&'a Value, SchemaError> {
    raw.default_value.as_ref().ok_or_else(|| missing(KEY_DEFAULT_VALUE, path))
}

fn text_default(raw: &RawDescriptor, path: &str) -> Result<String, SchemaError> {
    match required_default(raw, path)? {
        Value::String(text) => Ok(text.clone()),
        other => Err(wrong_default(path, "a string", other)),
    }
}

fn missing(key: &'static str, path: &str) -> SchemaError {
    SchemaError::MissingKey { key, path: path.to_owned(), context: None }
}

fn misplaced(kind: FieldType, path: &str) -> SchemaError {
    SchemaError::Misplaced { kind, path: path.to_owned(), context: None }
}

fn wrong_default(path: &str, expected: &str, found: &Value) -> SchemaError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    SchemaError::InvalidValue {
        key: KEY_DEFAULT_VALUE,
        path: path.to_owned(),
        message: format!("expected {expected}, found {found}").into(),
        context: None,
    }
}

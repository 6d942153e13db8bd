use std::borrow::Cow;
use wfh_domain::field::FieldType;

/// Load-time failures of a settings schema.
///
/// Every structural variant carries the `path` of the offending descriptor, such as
/// `[0].items[2]`.
#[wfh_derive::wfh_error]
pub enum SchemaError {
    /// The input is not JSON, or not an array of objects.
    #[error("Malformed schema JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown descriptor type '{found}' at {path}{}", format_context(.context))]
    UnknownType { found: String, path: String, context: Option<Cow<'static, str>> },

    /// A recognized type used at the wrong nesting level.
    #[error("Descriptor type '{kind}' is not allowed at {path}{}", format_context(.context))]
    Misplaced { kind: FieldType, path: String, context: Option<Cow<'static, str>> },

    #[error("Missing required key '{key}' at {path}{}", format_context(.context))]
    MissingKey { key: &'static str, path: String, context: Option<Cow<'static, str>> },

    #[error("Key '{key}' is not valid for '{kind}' at {path}{}", format_context(.context))]
    UnexpectedKey {
        key: &'static str,
        kind: FieldType,
        path: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid '{key}' at {path}: {message}{}", format_context(.context))]
    InvalidValue {
        key: &'static str,
        path: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Duplicate messageKey '{key}' at {path} (first declared at {first}){}",
        format_context(.context)
    )]
    DuplicateMessageKey {
        key: String,
        path: String,
        first: String,
        context: Option<Cow<'static, str>>,
    },

    /// Document-level shape problems, e.g. no submit button.
    #[error("Invalid document structure{}: {message}", format_context(.context))]
    Structure { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

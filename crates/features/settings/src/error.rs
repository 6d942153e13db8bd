use std::borrow::Cow;

/// Errors raised while reading settings messages.
#[wfh_derive::wfh_error]
pub enum SettingsError {
    /// The payload is not a JSON object of key/value pairs.
    #[error("Malformed settings message{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A known key carries a value the watch cannot interpret.
    #[error("Invalid value for '{key}'{}: {message}", format_context(.context))]
    InvalidValue {
        key: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

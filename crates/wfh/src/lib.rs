//! Facade crate for the Hellboy watchface settings.
//! Re-exports the shared primitives and the schema/settings features.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use wfh_domain as domain;
pub use wfh_kernel as kernel;
pub use wfh_schema as schema;
pub use wfh_settings as settings;

pub use wfh_schema::{SchemaDocument, SchemaError, hellboy_document};
pub use wfh_settings::{ClockFace, ClockStyle, SettingsError, SettingsMessage, WatchSettings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_wires_schema_into_settings() {
        let mut settings = WatchSettings::from_schema(hellboy_document());
        assert_eq!(settings, WatchSettings::default());

        let message = SettingsMessage::from_json(r#"{"show_weekday": 1}"#).unwrap();
        settings.apply(&message).unwrap();
        assert!(settings.show_weekday());
        assert!(schema::SchemaDocument::from_json(&hellboy_document().to_json().unwrap()).is_ok());
    }
}

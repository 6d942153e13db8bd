//! The settings page shipped with the Hellboy watchface.

use crate::SchemaDocument;
use crate::model::{Descriptor, Heading, Section, Submit, Toggle};
use std::sync::LazyLock;
use wfh_domain::constants::{SHOW_AM_PM, SHOW_LEADING_ZERO, SHOW_WEEKDAY};

pub const APPEARANCE_HEADING: &str = "Appearance";
pub const SUBMIT_CAPTION: &str = "Save Settings";

static HELLBOY: LazyLock<SchemaDocument> =
    LazyLock::new(|| SchemaDocument::trusted(hellboy_descriptors()));

/// The built-in document: one "Appearance" section with three toggles, then the submit
/// button. Built on first use and shared afterwards.
#[must_use]
pub fn hellboy_document() -> &'static SchemaDocument {
    &HELLBOY
}

/// Descriptors of the built-in document, in display order.
#[must_use]
pub fn hellboy_descriptors() -> Vec<Descriptor> {
    vec![
        Section::new(vec![
            Heading::new(APPEARANCE_HEADING).into(),
            Toggle::new(SHOW_AM_PM, "Show AM/PM", false).into(),
            Toggle::new(SHOW_LEADING_ZERO, "Show hour leading zero", true).into(),
            Toggle::new(SHOW_WEEKDAY, "Replace month with weekday", false).into(),
        ])
        .into(),
        Submit::new(SUBMIT_CAPTION).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn built_in_descriptors_pass_validation() {
        let checked = SchemaDocument::new(hellboy_descriptors()).expect("built-in schema is valid");
        assert_eq!(&checked, hellboy_document());
    }

    #[test]
    fn section_starts_with_the_heading() {
        let section = hellboy_document().sections().next().expect("one section");
        assert!(matches!(&section.items[0], Field::Heading(h) if h.text == APPEARANCE_HEADING));
    }

    #[test]
    fn shared_instance_is_reused() {
        assert!(std::ptr::eq(hellboy_document(), hellboy_document()));
    }
}

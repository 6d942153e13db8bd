use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized values of a descriptor's `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Section,
    Submit,
    Heading,
    Toggle,
}

impl FieldType {
    pub const ALL: [Self; 4] = [Self::Section, Self::Submit, Self::Heading, Self::Toggle];

    /// Parses the wire name, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Submit => "submit",
            Self::Heading => "heading",
            Self::Toggle => "toggle",
        }
    }

    /// Top-level types sit directly in the document; the rest live inside a section.
    #[must_use]
    pub const fn is_top_level(self) -> bool {
        matches!(self, Self::Section | Self::Submit)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

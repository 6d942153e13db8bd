//! # Watch Settings
//!
//! The watch-side view of the settings page: three boolean switches keyed by the
//! schema's `messageKey`s, the messages that carry them, and the clock face text they
//! shape.
//!
//! ```rust
//! use wfh_settings::{SettingsMessage, WatchSettings};
//!
//! let mut settings = WatchSettings::default();
//! let message = SettingsMessage::from_json(r#"{"show_am_pm": 1}"#).unwrap();
//! settings.apply(&message).unwrap();
//! assert!(settings.show_am_pm());
//! ```

pub mod clock;
mod error;
pub mod message;

pub use crate::clock::{ClockFace, ClockStyle, Meridiem};
pub use crate::error::{SettingsError, SettingsErrorExt};
pub use crate::message::{SettingsMessage, TupleValue};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wfh_domain::constants::MESSAGE_KEYS;
use wfh_domain::flags::SettingsFlags;
use wfh_schema::SchemaDocument;

/// Current state of the watch switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SettingsRecord", into = "SettingsRecord")]
pub struct WatchSettings {
    flags: SettingsFlags,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self { flags: SettingsFlags::SHOW_LEADING_ZERO }
    }
}

impl WatchSettings {
    #[must_use]
    pub const fn from_flags(flags: SettingsFlags) -> Self {
        Self { flags }
    }

    /// Initial settings described by the toggles of `schema`.
    ///
    /// Keys the watch has no switch for are skipped. Switches the schema does not
    /// mention keep their device default.
    #[must_use]
    pub fn from_schema(schema: &SchemaDocument) -> Self {
        let mut settings = Self::default();
        for toggle in schema.toggles() {
            let flag = SettingsFlags::from(toggle.message_key.as_str());
            if flag.is_empty() {
                warn!(key = %toggle.message_key, "Schema toggle has no matching watch setting");
                continue;
            }
            settings.flags.set(flag, toggle.default_value);
        }
        settings
    }

    /// Applies an inbound message and returns the switches whose value changed.
    ///
    /// The message is checked in full before anything is written, so a rejected message
    /// leaves the settings untouched.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidValue`] if a known key carries a text value.
    pub fn apply(&mut self, message: &SettingsMessage) -> Result<SettingsFlags, SettingsError> {
        let mut updates = Vec::with_capacity(message.len());
        for (key, value) in message.iter() {
            let flag = SettingsFlags::from(key);
            if flag.is_empty() {
                debug!(key, "Ignoring unknown settings key");
                continue;
            }
            updates.push((flag, value.as_switch(key)?));
        }

        let before = self.flags;
        for (flag, on) in updates {
            self.flags.set(flag, on);
        }
        let changed = before.symmetric_difference(self.flags);
        debug!(changed = changed.bits(), flags = self.flags.bits(), "Settings applied");
        Ok(changed)
    }

    /// Every switch as `1`/`0`, the form the watch sends back.
    #[must_use]
    pub fn to_message(&self) -> SettingsMessage {
        MESSAGE_KEYS
            .iter()
            .map(|&key| (key, self.flags.contains(SettingsFlags::from(key))))
            .collect()
    }

    #[must_use]
    pub const fn flags(&self) -> SettingsFlags {
        self.flags
    }

    #[must_use]
    pub const fn show_am_pm(&self) -> bool {
        self.flags.contains(SettingsFlags::SHOW_AM_PM)
    }

    #[must_use]
    pub const fn show_leading_zero(&self) -> bool {
        self.flags.contains(SettingsFlags::SHOW_LEADING_ZERO)
    }

    #[must_use]
    pub const fn show_weekday(&self) -> bool {
        self.flags.contains(SettingsFlags::SHOW_WEEKDAY)
    }
}

/// Human-readable form of [`WatchSettings`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SettingsRecord {
    #[serde(default)]
    show_am_pm: bool,
    #[serde(default = "default_leading_zero")]
    show_leading_zero: bool,
    #[serde(default)]
    show_weekday: bool,
}

const fn default_leading_zero() -> bool {
    true
}

impl From<SettingsRecord> for WatchSettings {
    fn from(record: SettingsRecord) -> Self {
        let mut flags = SettingsFlags::empty();
        flags.set(SettingsFlags::SHOW_AM_PM, record.show_am_pm);
        flags.set(SettingsFlags::SHOW_LEADING_ZERO, record.show_leading_zero);
        flags.set(SettingsFlags::SHOW_WEEKDAY, record.show_weekday);
        Self { flags }
    }
}

impl From<WatchSettings> for SettingsRecord {
    fn from(settings: WatchSettings) -> Self {
        Self {
            show_am_pm: settings.show_am_pm(),
            show_leading_zero: settings.show_leading_zero(),
            show_weekday: settings.show_weekday(),
        }
    }
}

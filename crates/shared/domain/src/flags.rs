use crate::constants::{SHOW_AM_PM, SHOW_LEADING_ZERO, SHOW_WEEKDAY};
use bitflags::bitflags;

bitflags! {
    /// Boolean watch settings, one bit per message key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SettingsFlags: u8 {
        const SHOW_AM_PM = 1 << 0;
        const SHOW_LEADING_ZERO = 1 << 1;
        const SHOW_WEEKDAY = 1 << 2;

        const ALL = Self::SHOW_AM_PM.bits()
            | Self::SHOW_LEADING_ZERO.bits()
            | Self::SHOW_WEEKDAY.bits();
    }
}

impl SettingsFlags {
    /// Message key for a single-bit flag, `None` for composites or the empty set.
    #[must_use]
    pub fn message_key(self) -> Option<&'static str> {
        if self == Self::SHOW_AM_PM {
            Some(SHOW_AM_PM)
        } else if self == Self::SHOW_LEADING_ZERO {
            Some(SHOW_LEADING_ZERO)
        } else if self == Self::SHOW_WEEKDAY {
            Some(SHOW_WEEKDAY)
        } else {
            None
        }
    }
}

impl From<&str> for SettingsFlags {
    fn from(key: &str) -> Self {
        match key {
            SHOW_AM_PM => Self::SHOW_AM_PM,
            SHOW_LEADING_ZERO => Self::SHOW_LEADING_ZERO,
            SHOW_WEEKDAY => Self::SHOW_WEEKDAY,
            _ => Self::empty(),
        }
    }
}

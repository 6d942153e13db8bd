//! Message keys shared between the settings page and the watch.

/// Show the AM/PM indicator next to the time.
pub const SHOW_AM_PM: &str = "show_am_pm";
/// Pad single-digit hours with a leading zero.
pub const SHOW_LEADING_ZERO: &str = "show_leading_zero";
/// Show the weekday instead of the month in the date line.
pub const SHOW_WEEKDAY: &str = "show_weekday";

/// Every message key the watch understands, in settings page order.
pub const MESSAGE_KEYS: [&str; 3] = [SHOW_AM_PM, SHOW_LEADING_ZERO, SHOW_WEEKDAY];

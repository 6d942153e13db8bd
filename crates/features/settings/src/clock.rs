//! Clock face text as the watch draws it.

use crate::WatchSettings;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The device's system clock preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockStyle {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

/// `strftime` pattern for the time line. `%k` and `%l` pad the hour with a space.
#[must_use]
pub const fn time_format(settings: &WatchSettings, style: ClockStyle) -> &'static str {
    match (style, settings.show_leading_zero()) {
        (ClockStyle::TwentyFourHour, true) => "%H:%M",
        (ClockStyle::TwentyFourHour, false) => "%k:%M",
        (ClockStyle::TwelveHour, true) => "%I:%M",
        (ClockStyle::TwelveHour, false) => "%l:%M",
    }
}

/// `strftime` pattern for the date line.
#[must_use]
pub const fn date_format(settings: &WatchSettings) -> &'static str {
    if settings.show_weekday() { "%a %e" } else { "%b %e" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour < 12 { Self::Am } else { Self::Pm }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered text of one clock face frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub meridiem: Option<Meridiem>,
}

impl ClockFace {
    #[must_use]
    pub fn render(settings: &WatchSettings, style: ClockStyle, at: NaiveDateTime) -> Self {
        let meridiem = settings.show_am_pm().then(|| Meridiem::from_hour(at.hour()));
        Self {
            time: at.format(time_format(settings, style)).to_string(),
            date: at.format(date_format(settings)).to_string(),
            meridiem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wfh_domain::flags::SettingsFlags;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn hour_padding_follows_leading_zero() {
        let padded = WatchSettings::default();
        let bare = WatchSettings::from_flags(SettingsFlags::empty());

        assert_eq!(ClockFace::render(&padded, ClockStyle::TwentyFourHour, at(9, 5)).time, "09:05");
        assert_eq!(ClockFace::render(&bare, ClockStyle::TwentyFourHour, at(9, 5)).time, " 9:05");
        assert_eq!(ClockFace::render(&padded, ClockStyle::TwelveHour, at(21, 30)).time, "09:30");
        assert_eq!(ClockFace::render(&bare, ClockStyle::TwelveHour, at(21, 30)).time, " 9:30");
    }

    #[test]
    fn twelve_hour_midnight_reads_twelve() {
        let face = ClockFace::render(&WatchSettings::default(), ClockStyle::TwelveHour, at(0, 15));
        assert_eq!(face.time, "12:15");
    }

    #[test]
    fn date_shows_month_or_weekday() {
        let month = WatchSettings::default();
        let weekday = WatchSettings::from_flags(SettingsFlags::SHOW_WEEKDAY);

        assert_eq!(ClockFace::render(&month, ClockStyle::TwentyFourHour, at(8, 0)).date, "Mar  7");
        assert_eq!(ClockFace::render(&weekday, ClockStyle::TwentyFourHour, at(8, 0)).date, "Thu  7");
    }

    #[test]
    fn meridiem_only_when_enabled() {
        let off = WatchSettings::default();
        let on = WatchSettings::from_flags(SettingsFlags::SHOW_AM_PM);

        assert_eq!(ClockFace::render(&off, ClockStyle::TwelveHour, at(13, 0)).meridiem, None);
        assert_eq!(
            ClockFace::render(&on, ClockStyle::TwentyFourHour, at(13, 0)).meridiem,
            Some(Meridiem::Pm)
        );
    }

    #[test]
    fn meridiem_boundaries() {
        assert_eq!(Meridiem::from_hour(0), Meridiem::Am);
        assert_eq!(Meridiem::from_hour(11), Meridiem::Am);
        assert_eq!(Meridiem::from_hour(12), Meridiem::Pm);
        assert_eq!(Meridiem::from_hour(23), Meridiem::Pm);
    }
}

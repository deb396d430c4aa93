//! Quiet-hours mode: a toggle plus the working window it applies to

use crate::error::{WellnessError, WellnessResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    #[serde(default)]
    pub enabled: bool,
    #[serde(with = "hhmm", default = "default_start")]
    pub start: NaiveTime,
    #[serde(with = "hhmm", default = "default_end")]
    pub end: NaiveTime,
}

fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

fn default_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default()
}

impl Default for QuietHours {
    fn default() -> Self {
        Self {
            enabled: false,
            start: default_start(),
            end: default_end(),
        }
    }
}

impl QuietHours {
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Set either end of the window from an HH:MM string
    pub fn set_window(&mut self, start: Option<&str>, end: Option<&str>) -> WellnessResult<()> {
        let start = start.map(parse_time).transpose()?;
        let end = end.map(parse_time).transpose()?;
        if let Some(start) = start {
            self.start = start;
        }
        if let Some(end) = end {
            self.end = end;
        }
        Ok(())
    }

    pub fn window(&self) -> String {
        format!(
            "{}-{}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// Parse an HH:MM time
pub fn parse_time(value: &str) -> WellnessResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| WellnessError::InvalidTime(value.to_string()))
}

mod hhmm {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let quiet = QuietHours::default();
        assert!(!quiet.enabled);
        assert_eq!(quiet.window(), "09:00-17:00");
    }

    #[test]
    fn test_toggle() {
        let mut quiet = QuietHours::default();
        assert!(quiet.toggle());
        assert!(!quiet.toggle());
    }

    #[test]
    fn test_set_window() {
        let mut quiet = QuietHours::default();
        quiet.set_window(Some("08:30"), None).unwrap();
        assert_eq!(quiet.window(), "08:30-17:00");
        assert_eq!(
            quiet.set_window(None, Some("25:00")),
            Err(WellnessError::InvalidTime("25:00".into()))
        );
        // A bad end leaves the start untouched too
        assert!(quiet.set_window(Some("07:00"), Some("nope")).is_err());
        assert_eq!(quiet.window(), "08:30-17:00");
    }

    #[test]
    fn test_serde_uses_hhmm() {
        let json = serde_json::to_value(QuietHours::default()).unwrap();
        assert_eq!(json["start"], "09:00");
        let parsed: QuietHours = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(parsed.enabled);
        assert_eq!(parsed.end, default_end());
    }
}

//! Tunable constants for time handling and display thresholds.

use std::borrow::Cow;

use serde::Deserialize;

use crate::models::types::Result;

/// Schedule configuration. The defaults describe Caltrain's dataset and
/// clock conventions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Offset applied to UTC to get service time. Fixed at PDT; no daylight
    /// saving adjustment is made.
    pub utc_offset_minutes: i32,
    /// Departures further in the past than this are treated as tomorrow's.
    pub past_grace_minutes: i32,
    /// Countdowns are only shown for departures at most this far away.
    pub countdown_horizon_minutes: i32,
    /// Departures at most this far away are flagged as imminent.
    pub imminent_minutes: i32,
    /// Raw service code that denotes weekday service.
    pub weekday_code: Cow<'static, str>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: -7 * 60,
            past_grace_minutes: 60,
            countdown_horizon_minutes: 90,
            imminent_minutes: 5,
            weekday_code: Cow::Borrowed("w"),
        }
    }
}

impl ScheduleConfig {
    /// Parse a JSON config; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.utc_offset_minutes, -420);
        assert_eq!(config.past_grace_minutes, 60);
        assert_eq!(config.weekday_code, "w");
    }

    #[test]
    fn test_partial_json() {
        let config = ScheduleConfig::from_json(r#"{"utc_offset_minutes": -480}"#).unwrap();
        assert_eq!(config.utc_offset_minutes, -480);
        assert_eq!(config.countdown_horizon_minutes, 90);
        assert_eq!(config.imminent_minutes, 5);
    }

    #[test]
    fn test_invalid_json() {
        assert!(ScheduleConfig::from_json("{").is_err());
    }
}

//! Singleton user settings persisted alongside the expense collection.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};
use serde_json::{Map, Value};

/// User-configurable budgeting preferences.
///
/// Every field carries a serde default so a partially persisted record merges
/// over the hardcoded defaults on load. Fields written by other versions of
/// the app are kept in `extra` and survive a save round-trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_weekly_budget")]
    pub weekly_budget: f64,
    /// Weekday the budget week begins on, 0 = Sunday through 6 = Saturday.
    #[serde(default)]
    pub week_start: u8,
    #[serde(default = "Settings::default_savings_goal")]
    pub savings_goal: f64,
    #[serde(default = "Settings::default_savings_saved")]
    pub savings_saved: f64,
    #[serde(default)]
    pub theme: Theme,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weekly_budget: Self::default_weekly_budget(),
            week_start: 0,
            savings_goal: Self::default_savings_goal(),
            savings_saved: Self::default_savings_saved(),
            theme: Theme::default(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    pub fn default_weekly_budget() -> f64 {
        50.0
    }

    pub fn default_savings_goal() -> f64 {
        150.0
    }

    pub fn default_savings_saved() -> f64 {
        20.0
    }

    /// Weekday name for the configured week start.
    pub fn week_start_label(&self) -> &'static str {
        match self.week_start % 7 {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// Display theme preference; `Auto` follows the platform.
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::Auto,
        }
    }

    /// Cycles auto -> light -> dark -> auto.
    pub fn next(self) -> Self {
        match self {
            Theme::Auto => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Auto,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Auto => "auto",
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_merge_over_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"weekly_budget": 80.0}"#).unwrap();
        assert_eq!(settings.weekly_budget, 80.0);
        assert_eq!(settings.week_start, 0);
        assert_eq!(settings.savings_goal, 150.0);
        assert_eq!(settings.savings_saved, 20.0);
        assert_eq!(settings.theme, Theme::Auto);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = r#"{"weekly_budget": 60.0, "pinned_category": "Food"}"#;
        let settings: Settings = serde_json::from_str(raw).unwrap();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["pinned_category"], "Food");
    }

    #[test]
    fn unrecognized_theme_falls_back_to_auto() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "sepia"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Auto);
    }

    #[test]
    fn theme_cycle_wraps_around() {
        assert_eq!(Theme::Auto.next(), Theme::Light);
        assert_eq!(Theme::Dark.next(), Theme::Auto);
    }
}

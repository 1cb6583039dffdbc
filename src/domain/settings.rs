use super::enums::{PomodoroMode, SoundType, Theme};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Accent colours offered by the settings view
pub const ACCENT_COLORS: &[&str] = &["#6A7EFC", "#FF6B6B", "#4ECDC4", "#FFB347", "#9B59B6"];

/// Timer durations (minutes) and long-break cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PomodoroSettings {
    pub focus_duration: u32,
    pub short_break_duration: u32,
    pub long_break_duration: u32,
    pub sessions_before_long_break: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            sessions_before_long_break: 4,
        }
    }
}

impl PomodoroSettings {
    /// Configured length of a mode in seconds
    pub fn duration_secs(&self, mode: PomodoroMode) -> u32 {
        let minutes = match mode {
            PomodoroMode::Focus => self.focus_duration,
            PomodoroMode::ShortBreak => self.short_break_duration,
            PomodoroMode::LongBreak => self.long_break_duration,
        };
        minutes.saturating_mul(60)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("Focus duration", self.focus_duration),
            ("Short break duration", self.short_break_duration),
            ("Long break duration", self.long_break_duration),
            ("Sessions before long break", self.sessions_before_long_break),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ValidationError::NotPositive { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub sound: bool,
    pub desktop: bool,
    pub sound_type: SoundType,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            sound: true,
            desktop: true,
            sound_type: SoundType::Bell,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplaySettings {
    pub theme: Theme,
    pub accent_color: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            accent_color: ACCENT_COLORS[0].to_string(),
        }
    }
}

impl DisplaySettings {
    /// Parse the accent colour as an RGB triple
    pub fn accent_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.accent_color)
    }
}

/// User settings persisted in the snapshot
///
/// Every section and field falls back to its default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pomodoro: PomodoroSettings,
    pub notifications: NotificationSettings,
    pub display: DisplaySettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pomodoro.validate()?;
        if self.display.accent_rgb().is_none() {
            return Err(ValidationError::AccentColor(self.display.accent_color.clone()));
        }
        Ok(())
    }
}

/// Parse "#RRGGBB"
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let settings = Settings::default();
        assert_eq!(settings.pomodoro.focus_duration, 25);
        assert_eq!(settings.pomodoro.short_break_duration, 5);
        assert_eq!(settings.pomodoro.long_break_duration, 15);
        assert_eq!(settings.pomodoro.sessions_before_long_break, 4);
        assert!(settings.notifications.sound);
        assert!(settings.notifications.desktop);
        assert_eq!(settings.notifications.sound_type, SoundType::Bell);
        assert_eq!(settings.display.theme, Theme::Light);
        assert_eq!(settings.display.accent_color, "#6A7EFC");
    }

    #[test]
    fn test_duration_secs() {
        let pomodoro = PomodoroSettings::default();
        assert_eq!(pomodoro.duration_secs(PomodoroMode::Focus), 1500);
        assert_eq!(pomodoro.duration_secs(PomodoroMode::ShortBreak), 300);
        assert_eq!(pomodoro.duration_secs(PomodoroMode::LongBreak), 900);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(value["pomodoro"]["focusDuration"], 25);
        assert_eq!(value["pomodoro"]["sessionsBeforeLongBreak"], 4);
        assert_eq!(value["notifications"]["soundType"], "bell");
        assert_eq!(value["display"]["accentColor"], "#6A7EFC");
    }

    #[test]
    fn test_partial_settings_fill_from_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings = serde_json::from_str(
            r#"{"pomodoro": {"focusDuration": 30}, "display": {"theme": "dark"}}"#,
        )
        .unwrap();
        assert_eq!(settings.pomodoro.focus_duration, 30);
        assert_eq!(settings.pomodoro.short_break_duration, 5);
        assert_eq!(settings.pomodoro.sessions_before_long_break, 4);
        assert_eq!(settings.notifications, NotificationSettings::default());
        assert_eq!(settings.display.theme, Theme::Dark);
        assert_eq!(settings.display.accent_color, "#6A7EFC");
    }

    #[test]
    fn test_validate_rejects_zero() {
        let mut settings = Settings::default();
        settings.pomodoro.short_break_duration = 0;
        assert_eq!(
            settings.validate(),
            Err(ValidationError::NotPositive {
                field: "Short break duration"
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_accent() {
        let mut settings = Settings::default();
        settings.display.accent_color = "blue".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::AccentColor(_))
        ));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#6A7EFC"), Some((0x6a, 0x7e, 0xfc)));
        assert_eq!(parse_hex_color("6A7EFC"), None);
        assert_eq!(parse_hex_color("#6A7EF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }
}

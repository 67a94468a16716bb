//! Accent tokens and theme presets
//!
//! Categories carry an abstract [`AccentToken`]. A [`Theme`] resolves tokens
//! to concrete colors, so light and dark variants share all of the logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract accent color attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentToken {
    Info,
    Success,
    Warning,
    Danger,
}

/// Built-in theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Resolve an accent token to a hex color
    pub fn accent_color(&self, token: AccentToken) -> &'static str {
        match (self, token) {
            (Theme::Light, AccentToken::Info) => "#3B82F6",
            (Theme::Light, AccentToken::Success) => "#22C55E",
            (Theme::Light, AccentToken::Warning) => "#F59E0B",
            (Theme::Light, AccentToken::Danger) => "#EF4444",
            (Theme::Dark, AccentToken::Info) => "#60A5FA",
            (Theme::Dark, AccentToken::Success) => "#4ADE80",
            (Theme::Dark, AccentToken::Warning) => "#FBBF24",
            (Theme::Dark, AccentToken::Danger) => "#F87171",
        }
    }

    /// Color of the unfilled gauge track
    pub fn track_color(&self) -> &'static str {
        match self {
            Theme::Light => "#E5E7EB",
            Theme::Dark => "#374151",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown theme: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_every_preset_parses_from_its_name() {
        for theme in Theme::ALL {
            assert_eq!(theme.name().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_accent_colors_differ_between_themes() {
        let tokens = [
            AccentToken::Info,
            AccentToken::Success,
            AccentToken::Warning,
            AccentToken::Danger,
        ];
        for token in tokens {
            assert_ne!(
                Theme::Light.accent_color(token),
                Theme::Dark.accent_color(token)
            );
        }
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::default().to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}

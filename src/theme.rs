use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme {
                background: Color::Black,
                text: Color::White,
                title: Color::Cyan,
                input: Color::Yellow,
                muted: Color::DarkGray,
                principal: Color::Green,
                interest: Color::Red,
            },
            ThemeKind::Light => Theme {
                background: Color::White,
                text: Color::Black,
                title: Color::Blue,
                input: Color::Magenta,
                muted: Color::Gray,
                principal: Color::Green,
                interest: Color::LightRed,
            },
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeKind::Dark),
            "light" => Ok(ThemeKind::Light),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Named colours the UI draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub input: Color,
    pub muted: Color,
    pub principal: Color,
    pub interest: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeKind::Dark.toggled(), ThemeKind::Light);
        assert_eq!(ThemeKind::Dark.toggled().toggled(), ThemeKind::Dark);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Light".parse::<ThemeKind>(), Ok(ThemeKind::Light));
        assert_eq!(ThemeKind::Dark.to_string().parse::<ThemeKind>(), Ok(ThemeKind::Dark));
        assert!("solarized".parse::<ThemeKind>().is_err());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeKind::Dark.palette(), ThemeKind::Light.palette());
        assert_eq!(ThemeKind::Light.palette().background, Color::White);
    }
}

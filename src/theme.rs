use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the chosen theme.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` for dark mode.
pub const DARK_CLASS: &str = "dark";

/// Runs before hydration so a stored dark theme never flashes light.
pub const BOOTSTRAP_SCRIPT: &str = r#"try{if(localStorage.getItem("theme")==="dark"){document.documentElement.classList.add("dark")}}catch(e){}"#;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else {
            Err(ThemeError::Unknown(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn parses_stored_strings() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light\n".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
    }

    #[test]
    fn display_matches_storage_format() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn unknown_stored_value_falls_back() {
        let theme = "neon".parse::<Theme>().unwrap_or_default();
        assert_eq!(theme, Theme::Light);
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn bootstrap_script_uses_same_key_and_class() {
        assert!(BOOTSTRAP_SCRIPT.contains(&format!("\"{STORAGE_KEY}\"")));
        assert!(BOOTSTRAP_SCRIPT.contains(&format!("\"{DARK_CLASS}\"")));
    }
}

//! Page theme selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Page theme around the board.
///
/// Purely cosmetic for the host: switching themes never touches the pixel
/// buffer or the history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorful,
}

impl Theme {
    /// Class name the host applies to the page body.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ();

    /// Accepts plain names and the theme button ids (`lightTheme`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.strip_suffix("theme").unwrap_or(&lower) {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "colorful" => Ok(Self::Colorful),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::from_str("colorfulTheme").unwrap(), Theme::Colorful);
        assert_eq!(Theme::from_str("LIGHT").unwrap(), Theme::Light);
        assert!(Theme::from_str("neon").is_err());
        assert!(Theme::from_str("theme").is_err());
    }

    #[test]
    fn test_class_name() {
        assert_eq!(Theme::Colorful.class_name(), "colorful");
    }
}

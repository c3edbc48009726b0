//! Configuration file support for the whiteboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/whiteboard/config.toml`. Settings include drawing defaults,
//! arrow appearance, history depth, zoom step, board size/background, and export naming.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ArrowConfig, BoardConfig, DrawingConfig, ExportConfig, HistoryConfig, ZoomConfig};

use crate::draw::{ArrowStyle, Color, FontDescriptor, SurfaceOptions};
use crate::export::{self, ExportOptions};
use crate::input::WhiteboardOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// line_width = 1.0
///
/// [arrow]
/// head_length = 10.0
/// head_angle_degrees = 30.0
///
/// [history]
/// max_undo = 50
///
/// [board]
/// width = 1280
/// height = 720
/// theme = "dark"
///
/// [export]
/// directory = "~/Pictures"
/// filename = "whiteboard.png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, stroke width, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Arrow appearance settings
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Undo history depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Zoom step
    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Board size, background and theme
    #[serde(default)]
    pub board: BoardConfig,

    /// PNG export location and naming
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// Non-finite floats (`nan`, `inf`) are replaced with their defaults first.
    ///
    /// Validated ranges:
    /// - `line_width`: 0.5 - 50.0
    /// - `font_size`: 4.0 - 200.0
    /// - `arrow.head_length`: 1.0 - 100.0
    /// - `arrow.head_angle_degrees`: 5.0 - 85.0
    /// - `history.max_undo`: 1 - 500
    /// - `zoom.step`: 0.01 - 0.9
    /// - `board.width` / `board.height`: 1 - 16384
    pub fn validate_and_clamp(&mut self) {
        let drawing = DrawingConfig::default();
        let arrow = ArrowConfig::default();

        clamp_finite(
            "line_width",
            &mut self.drawing.line_width,
            drawing.line_width,
            0.5,
            50.0,
        );
        clamp_finite(
            "font_size",
            &mut self.drawing.font_size,
            drawing.font_size,
            4.0,
            200.0,
        );

        if self.drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = "Sans".to_string();
        }

        clamp_finite(
            "arrow head_length",
            &mut self.arrow.head_length,
            arrow.head_length,
            1.0,
            100.0,
        );
        clamp_finite(
            "arrow head_angle_degrees",
            &mut self.arrow.head_angle_degrees,
            arrow.head_angle_degrees,
            5.0,
            85.0,
        );

        if !(1..=500).contains(&self.history.max_undo) {
            log::warn!(
                "Invalid max_undo {}, clamping to 1-500 range",
                self.history.max_undo
            );
            self.history.max_undo = self.history.max_undo.clamp(1, 500);
        }

        clamp_finite(
            "zoom step",
            &mut self.zoom.step,
            ZoomConfig::default().step,
            0.01,
            0.9,
        );

        if !(1..=16384).contains(&self.board.width) {
            log::warn!(
                "Invalid board width {}, clamping to 1-16384 range",
                self.board.width
            );
            self.board.width = self.board.width.clamp(1, 16384);
        }

        if !(1..=16384).contains(&self.board.height) {
            log::warn!(
                "Invalid board height {}, clamping to 1-16384 range",
                self.board.height
            );
            self.board.height = self.board.height.clamp(1, 16384);
        }

        let background = BoardConfig::default().background_color;
        for (i, channel) in self.board.background_color.iter_mut().enumerate() {
            clamp_finite(
                &format!("background_color[{}]", i),
                channel,
                background[i],
                0.0,
                1.0,
            );
        }

        if self.export.filename.trim().is_empty() {
            log::warn!(
                "Empty export filename, falling back to '{}'",
                export::DEFAULT_FILENAME
            );
            self.export.filename = export::DEFAULT_FILENAME.to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/whiteboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("whiteboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from TOML text without validating it.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Background color of the board.
    pub fn background(&self) -> Color {
        let [r, g, b] = self.board.background_color;
        Color::new(r, g, b, 1.0)
    }

    /// Board settings derived from this configuration.
    pub fn whiteboard_options(&self) -> WhiteboardOptions {
        WhiteboardOptions {
            surface: SurfaceOptions {
                background: self.background(),
                line_width: self.drawing.line_width,
                font: FontDescriptor::new(self.drawing.font_family.clone(), self.drawing.font_size),
                arrow: ArrowStyle {
                    head_length: self.arrow.head_length,
                    head_angle: self.arrow.head_angle_degrees,
                },
            },
            default_color: self.drawing.default_color.to_color(),
            max_undo: self.history.max_undo,
            zoom_step: self.zoom.step,
            theme: self.board.theme,
            export: ExportOptions {
                directory: export::expand_tilde(&self.export.directory),
                filename: self.export.filename.clone(),
                filename_template: self.export.filename_template.clone(),
            },
        }
    }
}

/// Replaces a non-finite `value` with `default`, then clamps it into `min..=max`.
fn clamp_finite(name: &str, value: &mut f64, default: f64, min: f64, max: f64) {
    if !value.is_finite() {
        log::warn!("Invalid {} {}, falling back to {}", name, value, default);
        *value = default;
    }
    if !(min..=max).contains(value) {
        log::warn!(
            "Invalid {} {:.3}, clamping to {}-{} range",
            name,
            value,
            min,
            max
        );
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use crate::input::Theme;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_board_behavior() {
        let options = Config::default().whiteboard_options();
        assert_eq!(options.default_color, BLACK);
        assert_eq!(options.surface.background, WHITE);
        assert_eq!(options.surface.line_width, 1.0);
        assert_eq!(options.surface.arrow.head_length, 10.0);
        assert_eq!(options.surface.arrow.head_angle, 30.0);
        assert_eq!(options.max_undo, 50);
        assert_eq!(options.zoom_step, 0.1);
        assert_eq!(options.export.filename, "whiteboard.png");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = [0, 0, 255]

            [board]
            theme = "colorful"
            width = 320
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([0, 0, 255]));
        assert_eq!(config.board.theme, Theme::Colorful);
        assert_eq!(config.board.width, 320);
        assert_eq!(config.board.height, 600);
        assert_eq!(config.history.max_undo, 50);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.drawing.line_width = 0.0;
        config.arrow.head_angle_degrees = 120.0;
        config.history.max_undo = 0;
        config.zoom.step = 5.0;
        config.board.width = -10;
        config.board.background_color = [1.5, -0.2, 0.5];
        config.export.filename = "  ".to_string();

        config.validate_and_clamp();

        assert_eq!(config.drawing.line_width, 0.5);
        assert_eq!(config.arrow.head_angle_degrees, 85.0);
        assert_eq!(config.history.max_undo, 1);
        assert_eq!(config.zoom.step, 0.9);
        assert_eq!(config.board.width, 1);
        assert_eq!(config.board.background_color, [1.0, 0.0, 0.5]);
        assert_eq!(config.export.filename, "whiteboard.png");
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let mut config = Config::from_toml(
            r#"
            [drawing]
            line_width = nan
            font_size = inf

            [arrow]
            head_length = -inf
            head_angle_degrees = nan

            [zoom]
            step = nan

            [board]
            background_color = [nan, 0.25, inf]
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.drawing.line_width, 1.0);
        assert_eq!(config.drawing.font_size, 10.0);
        assert_eq!(config.arrow.head_length, 10.0);
        assert_eq!(config.arrow.head_angle_degrees, 30.0);
        assert_eq!(config.zoom.step, 0.1);
        assert_eq!(config.board.background_color, [1.0, 0.25, 1.0]);
        assert_eq!(config.whiteboard_options().surface.line_width, 1.0);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\nline_width = 2").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn toml_round_trip_preserves_values() {
        let mut config = Config::default();
        config.export.filename_template = Some("board_%H%M".to_string());
        let text = config.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed.export.filename_template.as_deref(), Some("board_%H%M"));
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("history"));
        assert!(schema.contains("max_undo"));
    }
}

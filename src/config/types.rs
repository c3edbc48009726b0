//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Theme;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color: hex (`#000000`), a name, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke width in pixels for pen, eraser and shape outlines (valid range: 0.5 - 50.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Font family for the text tool (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in pixels for the text tool (valid range: 4.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            line_width: default_line_width(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

/// Arrow drawing settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead segment length in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_head_length")]
    pub head_length: f64,

    /// Angle between each head segment and the shaft, in degrees (valid range: 5.0 - 85.0)
    #[serde(default = "default_head_angle")]
    pub head_angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_length: default_head_length(),
            head_angle_degrees: default_head_angle(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum undo entries; the oldest is evicted beyond this (valid range: 1 - 500)
    #[serde(default = "default_max_undo")]
    pub max_undo: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_undo: default_max_undo(),
        }
    }
}

/// Zoom settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ZoomConfig {
    /// Zoom in multiplies by `1 + step`, zoom out by `1 - step` (valid range: 0.01 - 0.9)
    #[serde(default = "default_zoom_step")]
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: default_zoom_step(),
        }
    }
}

/// Board surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Background RGB (0.0-1.0 range); also the eraser color
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 3],

    /// Initial buffer width in pixels
    #[serde(default = "default_width")]
    pub width: i32,

    /// Initial buffer height in pixels
    #[serde(default = "default_height")]
    pub height: i32,

    /// Page theme: light, dark, or colorful
    #[serde(default)]
    pub theme: Theme,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            width: default_width(),
            height: default_height(),
            theme: Theme::default(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory to save into (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name used when no template is set
    #[serde(default = "default_export_filename")]
    pub filename: String,

    /// Optional chrono template, e.g. "whiteboard_%Y%m%d_%H%M%S" (`.png` is appended)
    #[serde(default)]
    pub filename_template: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
            filename_template: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_line_width() -> f64 {
    1.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    10.0
}

fn default_head_length() -> f64 {
    10.0
}

fn default_head_angle() -> f64 {
    30.0
}

fn default_max_undo() -> usize {
    crate::history::DEFAULT_MAX_UNDO
}

fn default_zoom_step() -> f64 {
    crate::view::DEFAULT_ZOOM_STEP
}

fn default_background_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_export_filename() -> String {
    crate::export::DEFAULT_FILENAME.to_string()
}

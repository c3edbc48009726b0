//! PNG export of the board.

use crate::draw::{Surface, SurfaceError};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default export file name.
pub const DEFAULT_FILENAME: &str = "whiteboard.png";

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode board: {0}")]
    Encode(#[from] SurfaceError),

    #[error("Failed to save board: {0}")]
    Io(#[from] std::io::Error),
}

/// Where and under which name the PNG is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Directory to write into
    pub directory: PathBuf,
    /// Fixed file name, used when no template is set
    pub filename: String,
    /// Optional chrono format template; `.png` is appended
    pub filename_template: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename: DEFAULT_FILENAME.to_string(),
            filename_template: None,
        }
    }
}

impl ExportOptions {
    /// Writes to exactly `path`.
    pub fn to_path(path: &Path) -> Self {
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        Self {
            directory,
            filename,
            filename_template: None,
        }
    }

    /// The file name the next export will use.
    pub fn resolve_filename(&self) -> String {
        match &self.filename_template {
            Some(template) => generate_filename(template, "png"),
            None => self.filename.clone(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Encodes the buffer as it is right now.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    Ok(surface.read_snapshot()?.as_bytes().to_vec())
}

/// Writes the current buffer as a PNG file.
///
/// # Returns
/// Path to the saved file
pub fn save_png(surface: &Surface, options: &ExportOptions) -> Result<PathBuf, ExportError> {
    let png = encode_png(surface)?;
    let directory = ensure_directory_exists(&options.directory)?;
    let file_path = directory.join(options.resolve_filename());

    log::info!(
        "Saving board to: {} ({} bytes)",
        file_path.display(),
        png.len()
    );
    fs::write(&file_path, &png)?;

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

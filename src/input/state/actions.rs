use crate::draw::{Snapshot, SurfaceError};
use crate::export::{self, ExportError};
use crate::input::{theme::Theme, tool::Tool};
use crate::util;
use log::{debug, error, info, warn};
use std::path::PathBuf;

use super::Whiteboard;

impl Whiteboard {
    /// Selects a tool by its button id.
    ///
    /// Unknown ids leave the current tool unchanged.
    pub fn select_tool(&mut self, id: &str) {
        match id.parse::<Tool>() {
            Ok(tool) => {
                self.tools.current_tool = tool;
                debug!("Tool selected: {}", tool);
            }
            Err(()) => debug!("Ignoring unknown tool id '{}'", id),
        }
    }

    /// Sets the drawing color from a color input value (`#rrggbb`, `#rgb`, or a name).
    pub fn select_color(&mut self, value: &str) {
        match util::parse_color(value) {
            Some(color) => {
                self.tools.current_color = color;
                debug!("Color selected: {}", color.to_hex());
            }
            None => warn!("Ignoring invalid color '{}'", value),
        }
    }

    /// Replaces the text the text tool will place.
    pub fn set_text_input(&mut self, text: impl Into<String>) {
        self.text_input = text.into();
    }

    /// Switches the page theme. The buffer and history are not touched.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        debug!("Theme set to {}", theme.class_name());
    }

    /// Commits the current buffer, then resets every pixel to the background.
    pub fn clear(&mut self) {
        self.commit_snapshot();
        self.surface.clear();
        info!("Board cleared");
    }

    /// Restores the most recent history entry.
    ///
    /// Returns `false` when there is nothing to undo. The restore finishes
    /// before this returns, so consecutive undo/redo calls apply in order.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = match self.surface.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("Undo aborted: {}", err);
                return false;
            }
        };
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.restore(&previous)
    }

    /// Re-applies the most recently undone entry.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = match self.surface.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("Redo aborted: {}", err);
                return false;
            }
        };
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.restore(&next)
    }

    fn restore(&mut self, snapshot: &Snapshot) -> bool {
        // Decode failures are logged by the surface; the buffer stays as it was.
        self.surface.write_snapshot(snapshot).is_ok()
    }

    pub fn zoom_in(&mut self) -> Result<(), SurfaceError> {
        self.view.zoom_in(&self.surface)
    }

    pub fn zoom_out(&mut self) -> Result<(), SurfaceError> {
        self.view.zoom_out(&self.surface)
    }

    pub fn reset_zoom(&mut self) -> Result<(), SurfaceError> {
        self.view.reset(&self.surface)
    }

    /// Resizes the buffer to the new viewport, keeping top-left content.
    ///
    /// The zoom scale value is kept even though the new buffer draws with an
    /// identity matrix.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        self.surface.resize(width, height)
    }

    /// Writes the current buffer as a PNG and returns its path.
    pub fn save(&self) -> Result<PathBuf, ExportError> {
        export::save_png(&self.surface, &self.export)
    }
}

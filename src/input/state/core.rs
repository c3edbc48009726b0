//! Drawing state machine and board state.

use crate::draw::{BLACK, Color, Surface, SurfaceError, SurfaceOptions};
use crate::export::ExportOptions;
use crate::history::{DEFAULT_MAX_UNDO, History};
use crate::input::{theme::Theme, tool::Tool};
use crate::view::{DEFAULT_ZOOM_STEP, ViewTransform};
use log::error;

/// Gesture state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No pointer held down
    Idle,
    /// Between pointer-down and pointer-up
    Active {
        /// Tool the gesture was started with
        tool: Tool,
        /// Pointer-down position
        origin: (f64, f64),
        /// Last position the freehand path was extended to
        last: (f64, f64),
    },
}

/// Tool selection plus the in-progress gesture.
#[derive(Debug, Clone)]
pub struct ToolState {
    /// Selected tool
    pub current_tool: Tool,
    /// Selected stroke/fill color
    pub current_color: Color,
    /// Position of the most recent pointer-down, if any
    pub gesture_origin: Option<(f64, f64)>,
    /// Current gesture state
    pub state: DrawingState,
}

impl ToolState {
    pub fn new(color: Color) -> Self {
        Self {
            current_tool: Tool::default(),
            current_color: color,
            gesture_origin: None,
            state: DrawingState::Idle,
        }
    }

    /// Whether a gesture is between pointer-down and pointer-up.
    pub fn gesture_active(&self) -> bool {
        matches!(self.state, DrawingState::Active { .. })
    }
}

/// Settings a board starts with.
#[derive(Debug, Clone)]
pub struct WhiteboardOptions {
    pub surface: SurfaceOptions,
    pub default_color: Color,
    pub max_undo: usize,
    pub zoom_step: f64,
    pub theme: Theme,
    pub export: ExportOptions,
}

impl Default for WhiteboardOptions {
    fn default() -> Self {
        Self {
            surface: SurfaceOptions::default(),
            default_color: BLACK,
            max_undo: DEFAULT_MAX_UNDO,
            zoom_step: DEFAULT_ZOOM_STEP,
            theme: Theme::default(),
            export: ExportOptions::default(),
        }
    }
}

/// The whole board: buffer, tool state, history, zoom and page settings.
///
/// Every trigger control maps to one method; pointer events go through the
/// `on_pointer_*` methods, which form the gesture controller.
pub struct Whiteboard {
    pub(crate) surface: Surface,
    /// Tool, color, and gesture state
    pub tools: ToolState,
    pub(crate) history: History,
    pub(crate) view: ViewTransform,
    /// Current contents of the text field used by the text tool
    pub text_input: String,
    /// Page theme (cosmetic)
    pub theme: Theme,
    /// Where `save` writes the PNG
    pub export: ExportOptions,
}

impl Whiteboard {
    /// Creates a board with a background-filled buffer of the given size.
    pub fn new(width: i32, height: i32, options: WhiteboardOptions) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: Surface::new(width, height, options.surface)?,
            tools: ToolState::new(options.default_color),
            history: History::new(options.max_undo),
            view: ViewTransform::new(options.zoom_step),
            text_input: String::new(),
            theme: options.theme,
            export: options.export,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Encodes the buffer and commits it as a history entry.
    ///
    /// An encode failure is logged and the commit is skipped.
    pub(super) fn commit_snapshot(&mut self) {
        match self.surface.read_snapshot() {
            Ok(snapshot) => self.history.commit(snapshot),
            Err(err) => error!("Skipping history commit: {}", err),
        }
    }
}

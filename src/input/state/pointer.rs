use crate::input::events::{PointerEvent, PointerResponse};
use crate::input::tool::Tool;
use log::debug;

use super::{DrawingState, Whiteboard};

impl Whiteboard {
    /// Processes a pointer press (mouse-down or touch-start).
    ///
    /// # Behavior
    /// - Text tool: places the text field's contents at the press point and
    ///   commits; the gesture ends immediately
    /// - Pen/eraser: starts a freehand path at the press point
    /// - Shape tools: starts a gesture; nothing is drawn until release
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> PointerResponse {
        let origin = event.position();
        let tool = self.tools.current_tool;
        self.tools.gesture_origin = Some(origin);

        if tool == Tool::Text {
            self.surface
                .place_text(&self.text_input, origin, self.tools.current_color);
            self.commit_snapshot();
            self.tools.state = DrawingState::Idle;
            debug!("Placed text {:?} at {:?}", self.text_input, origin);
            return PointerResponse::handled(true);
        }

        self.tools.state = DrawingState::Active {
            tool,
            origin,
            last: origin,
        };
        debug!("Gesture started with {} at {:?}", tool, origin);
        PointerResponse::handled(false)
    }

    /// Processes pointer motion (mouse-move or touch-move).
    ///
    /// Only freehand tools draw while moving: the path is extended to the new
    /// position and stroked right away, in the current color for the pen and
    /// in the background color for the eraser. Shape tools show no preview.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> PointerResponse {
        let DrawingState::Active { tool, last, .. } = &mut self.tools.state else {
            return PointerResponse::handled(false);
        };

        if !tool.is_freehand() {
            return PointerResponse::handled(false);
        }
        let color = if *tool == Tool::Eraser {
            self.surface.background()
        } else {
            self.tools.current_color
        };

        let position = event.position();
        let line_width = self.surface.options().line_width;
        self.surface
            .stroke_segment(*last, position, color, line_width);
        *last = position;
        PointerResponse::handled(true)
    }

    /// Processes a pointer release (mouse-up or touch-end).
    ///
    /// Shape tools stroke their outline from the gesture origin to the release
    /// point. Every completed gesture commits a snapshot and returns to idle.
    /// Releasing without an active gesture does nothing.
    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> PointerResponse {
        let DrawingState::Active { tool, origin, .. } = self.tools.state else {
            return PointerResponse::handled(false);
        };
        self.tools.state = DrawingState::Idle;

        let position = event.position();
        if let Some(kind) = tool.shape_kind() {
            let extent = (position.0 - origin.0, position.1 - origin.1);
            self.surface
                .stroke_shape_outline(kind, origin, extent, self.tools.current_color);
        }

        self.commit_snapshot();
        debug!("Gesture with {} ended at {:?}", tool, position);
        PointerResponse::handled(true)
    }
}

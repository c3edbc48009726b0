//! Input handling and the gesture state machine.
//!
//! This module translates tool/color selections, pointer events, and button
//! signals into drawing operations on the board. It holds the current tool
//! state and drives history commits.

pub mod events;
pub mod state;
pub mod theme;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerResponse, PointerSource};
pub use state::{DrawingState, ToolState, Whiteboard, WhiteboardOptions};
pub use theme::Theme;
pub use tool::Tool;

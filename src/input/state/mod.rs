mod actions;
mod core;
mod pointer;

pub use core::{DrawingState, ToolState, Whiteboard, WhiteboardOptions};

//! Drawing tool selection.

use crate::draw::ShapeKind;
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The set is closed: one identifier per tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing, stroked while the pointer moves (default)
    #[default]
    Pen,
    /// Freehand drawing in the background color
    Eraser,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Ellipse inscribed in the dragged box
    Circle,
    /// Straight line between press and release
    Line,
    /// Triangle with its apex at the top-center of the dragged box
    Triangle,
    /// Line with a head at the release point
    Arrow,
    /// One-shot text placement at the press point
    Text,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 8] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
        Tool::Triangle,
        Tool::Arrow,
        Tool::Text,
    ];

    /// The identifier used by the trigger controls.
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Triangle => "triangle",
            Tool::Arrow => "arrow",
            Tool::Text => "text",
        }
    }

    /// Whether the tool draws incrementally while the pointer moves.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }

    /// The outline this tool strokes on release, if it is a shape tool.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Line => Some(ShapeKind::Line),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Pen | Tool::Eraser | Tool::Text => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tool {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == s.trim())
            .ok_or(())
    }
}

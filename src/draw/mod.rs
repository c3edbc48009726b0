//! Rendering primitives and the pixel buffer (Cairo-based).
//!
//! This module defines the drawing types used by the board:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Outline geometry resolved from a gesture (never retained)
//! - [`Surface`]: The pixel buffer and its primitive drawing operations
//! - [`Snapshot`]: Encoded copy of the whole buffer used as a restore point

pub mod color;
pub mod font;
pub mod render;
pub mod shape;
pub mod snapshot;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use render::{render_segment, render_shape, render_text};
pub use shape::{ArrowStyle, Shape, ShapeKind};
pub use snapshot::Snapshot;
pub use surface::{Frame, Rgba, Surface, SurfaceError, SurfaceOptions};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};

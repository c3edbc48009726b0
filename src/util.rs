//! Utility functions for colors and shape geometry.
//!
//! This module provides:
//! - Hex and name based color parsing (constants live in draw::color)
//! - Arrowhead geometry calculations
//! - Triangle and ellipse geometry derived from a gesture's origin and extent

use crate::draw::{Color, color::*};

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two arrowhead endpoints for an arrow drawn from `from` to `to`.
///
/// The head sits at `to`. With `angle = atan2(dy, dx)` of the shaft, each head
/// segment runs back from `to` by `length` at `angle - head_angle` and
/// `angle + head_angle` respectively:
///
/// `(to.x - length * cos(angle ∓ head_angle), to.y - length * sin(angle ∓ head_angle))`
///
/// A zero-length shaft yields `angle = 0`, so the head still points left.
///
/// # Returns
/// `[first, second]` where `first` uses `angle - head_angle`.
pub fn arrowhead_points(
    from: (f64, f64),
    to: (f64, f64),
    length: f64,
    head_angle_degrees: f64,
) -> [(f64, f64); 2] {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let angle = dy.atan2(dx);
    let head = head_angle_degrees.to_radians();

    let first = (
        to.0 - length * (angle - head).cos(),
        to.1 - length * (angle - head).sin(),
    );
    let second = (
        to.0 - length * (angle + head).cos(),
        to.1 - length * (angle + head).sin(),
    );

    [first, second]
}

// ============================================================================
// Shape Geometry
// ============================================================================

/// Vertices of the triangle spanned by a gesture.
///
/// Apex at top-center `(x + w/2, y)`, base corners at `(x, y + h)` and
/// `(x + w, y + h)`. Negative extents mirror the triangle.
pub fn triangle_vertices(origin: (f64, f64), extent: (f64, f64)) -> [(f64, f64); 3] {
    let (x, y) = origin;
    let (w, h) = extent;
    [(x + w / 2.0, y), (x, y + h), (x + w, y + h)]
}

/// Calculates ellipse center and radii from the gesture's bounding box.
///
/// Radii are absolute half-extents so dragging up/left still yields a
/// positive ellipse.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)`.
pub fn ellipse_bounds(origin: (f64, f64), extent: (f64, f64)) -> (f64, f64, f64, f64) {
    let (x, y) = origin;
    let (w, h) = extent;
    (x + w / 2.0, y + h / 2.0, (w / 2.0).abs(), (h / 2.0).abs())
}

// ============================================================================
// Color Parsing
// ============================================================================

/// Parses `#rrggbb` or `#rgb` (case-insensitive) into an opaque color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
        }
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .ok()
                    .map(|v| v * 16 + v)
            };
            Some(Color::from_rgb8(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Resolves either a hex string or a color name.
pub fn parse_color(value: &str) -> Option<Color> {
    parse_hex_color(value).or_else(|| name_to_color(value.trim()))
}

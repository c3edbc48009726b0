//! Outline shapes produced when a shape gesture is released.
//!
//! A [`Shape`] only lives long enough to be stroked into the surface; the
//! board keeps pixels, not shapes.

use crate::util;

/// The shape tools that stroke an outline on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
    Triangle,
    Arrow,
}

/// Arrowhead appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Length of each head segment in pixels
    pub head_length: f64,
    /// Angle between each head segment and the reversed shaft, in degrees
    pub head_angle: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            head_length: 10.0,
            head_angle: 30.0,
        }
    }
}

/// Resolved outline geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle anchored at the gesture origin; `w`/`h` keep their sign
    Rect { x: f64, y: f64, w: f64, h: f64 },
    /// Ellipse inscribed in the gesture's bounding box
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    /// Straight segment from origin to release point
    Line { from: (f64, f64), to: (f64, f64) },
    /// Closed triangle, apex first
    Triangle { vertices: [(f64, f64); 3] },
    /// Shaft plus two head segments at `to`
    Arrow {
        from: (f64, f64),
        to: (f64, f64),
        head: [(f64, f64); 2],
    },
}

impl Shape {
    /// Builds the outline for `kind` from a gesture anchor and its signed extent.
    pub fn from_gesture(
        kind: ShapeKind,
        origin: (f64, f64),
        extent: (f64, f64),
        arrow: &ArrowStyle,
    ) -> Self {
        let (x, y) = origin;
        let (w, h) = extent;
        let end = (x + w, y + h);
        match kind {
            ShapeKind::Rectangle => Shape::Rect { x, y, w, h },
            ShapeKind::Circle => {
                let (cx, cy, rx, ry) = util::ellipse_bounds(origin, extent);
                Shape::Ellipse { cx, cy, rx, ry }
            }
            ShapeKind::Line => Shape::Line {
                from: origin,
                to: end,
            },
            ShapeKind::Triangle => Shape::Triangle {
                vertices: util::triangle_vertices(origin, extent),
            },
            ShapeKind::Arrow => Shape::Arrow {
                from: origin,
                to: end,
                head: util::arrowhead_points(origin, end, arrow.head_length, arrow.head_angle),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_keeps_signed_extent() {
        let shape = Shape::from_gesture(
            ShapeKind::Rectangle,
            (50.0, 50.0),
            (-20.0, -10.0),
            &ArrowStyle::default(),
        );
        assert_eq!(
            shape,
            Shape::Rect {
                x: 50.0,
                y: 50.0,
                w: -20.0,
                h: -10.0
            }
        );
    }

    #[test]
    fn circle_uses_half_extents() {
        let shape = Shape::from_gesture(
            ShapeKind::Circle,
            (10.0, 10.0),
            (-30.0, 50.0),
            &ArrowStyle::default(),
        );
        assert_eq!(
            shape,
            Shape::Ellipse {
                cx: -5.0,
                cy: 35.0,
                rx: 15.0,
                ry: 25.0
            }
        );
    }

    #[test]
    fn triangle_from_gesture() {
        let shape = Shape::from_gesture(
            ShapeKind::Triangle,
            (10.0, 10.0),
            (40.0, 20.0),
            &ArrowStyle::default(),
        );
        assert_eq!(
            shape,
            Shape::Triangle {
                vertices: [(30.0, 10.0), (10.0, 30.0), (50.0, 30.0)]
            }
        );
    }

    #[test]
    fn arrow_head_sits_at_release_point() {
        let shape = Shape::from_gesture(
            ShapeKind::Arrow,
            (0.0, 0.0),
            (10.0, 0.0),
            &ArrowStyle::default(),
        );
        let Shape::Arrow { from, to, head } = shape else {
            panic!("expected arrow");
        };
        assert_eq!(from, (0.0, 0.0));
        assert_eq!(to, (10.0, 0.0));
        assert!((head[0].0 - 1.34).abs() < 0.01 && (head[0].1 - 5.0).abs() < 1e-9);
        assert!((head[1].0 - 1.34).abs() < 0.01 && (head[1].1 + 5.0).abs() < 1e-9);
    }

    #[test]
    fn line_ends_at_release_point() {
        let shape = Shape::from_gesture(
            ShapeKind::Line,
            (3.0, 4.0),
            (-3.0, 6.0),
            &ArrowStyle::default(),
        );
        assert_eq!(
            shape,
            Shape::Line {
                from: (3.0, 4.0),
                to: (0.0, 10.0)
            }
        );
    }
}

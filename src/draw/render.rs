//! Cairo-based rendering functions for strokes, outlines, and text.
//!
//! These draw straight into whatever context they are handed, under that
//! context's current transformation matrix.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::Shape;

/// Strokes a single segment.
pub fn render_segment(
    ctx: &cairo::Context,
    from: (f64, f64),
    to: (f64, f64),
    color: Color,
    width: f64,
) {
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    let _ = ctx.stroke();
}

/// Strokes the outline of a shape.
///
/// Dispatches on the shape variant. An ellipse with one zero radius collapses
/// to a segment along the other axis; with both radii zero nothing is drawn.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, color: Color, width: f64) {
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_line_join(cairo::LineJoin::Miter);

    match shape {
        Shape::Rect { x, y, w, h } => {
            ctx.rectangle(*x, *y, *w, *h);
        }
        Shape::Ellipse { cx, cy, rx, ry } => {
            if *rx == 0.0 && *ry == 0.0 {
                return;
            }
            if *rx == 0.0 {
                ctx.move_to(*cx, cy - ry);
                ctx.line_to(*cx, cy + ry);
            } else if *ry == 0.0 {
                ctx.move_to(cx - rx, *cy);
                ctx.line_to(cx + rx, *cy);
            } else {
                let _ = ctx.save();
                ctx.translate(*cx, *cy);
                ctx.scale(*rx, *ry);
                ctx.new_sub_path();
                ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
                let _ = ctx.restore();
            }
        }
        Shape::Line { from, to } => {
            ctx.move_to(from.0, from.1);
            ctx.line_to(to.0, to.1);
        }
        Shape::Triangle { vertices } => {
            let [apex, left, right] = vertices;
            ctx.move_to(apex.0, apex.1);
            ctx.line_to(left.0, left.1);
            ctx.line_to(right.0, right.1);
            ctx.close_path();
        }
        Shape::Arrow { from, to, head } => {
            ctx.move_to(from.0, from.1);
            ctx.line_to(to.0, to.1);
            ctx.line_to(head[0].0, head[0].1);
            ctx.move_to(to.0, to.1);
            ctx.line_to(head[1].0, head[1].1);
        }
    }

    let _ = ctx.stroke();
}

/// Fills a single line of text with its baseline starting at `position`.
///
/// No wrapping or multi-line layout: the string goes into one Pango layout
/// and is filled once. An empty string draws nothing.
pub fn render_text(
    ctx: &cairo::Context,
    text: &str,
    position: (f64, f64),
    color: Color,
    font: &FontDescriptor,
) {
    if text.is_empty() {
        return;
    }

    let _ = ctx.save();

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string());
    layout.set_font_description(Some(&font_desc));
    layout.set_single_paragraph_mode(true);
    layout.set_text(text);

    // Pango positions layouts by their top-left corner
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(position.0, position.1 - baseline);

    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}

/// Paints the whole clip region with a solid color, replacing what is there.
pub fn render_fill(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Fills the rectangle `(0, 0, width, height)` in user space with `color`.
///
/// Under a scaled matrix this covers more or less than the device buffer.
pub fn render_fill_rect(ctx: &cairo::Context, width: f64, height: f64, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill();
    let _ = ctx.restore();
}

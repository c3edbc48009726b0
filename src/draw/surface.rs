//! The pixel buffer and its drawing primitives.
//!
//! [`Surface`] owns a Cairo image surface together with one long-lived
//! context. The context's transformation matrix is never reset between
//! draws, so anything drawn after a zoom lands under the current scale.

use super::color::{Color, WHITE};
use super::font::FontDescriptor;
use super::render;
use super::shape::{ArrowStyle, Shape, ShapeKind};
use super::snapshot::Snapshot;
use log::{debug, error};
use std::io::Cursor;
use thiserror::Error;

/// Errors raised by surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] cairo::IoError),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] cairo::IoError),

    #[error("buffer is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// A single pixel read back from the buffer (straight, not premultiplied, alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Un-premultiplied copy of every pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: i32,
    height: i32,
    pixels: Vec<Rgba>,
}

impl Frame {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

/// Drawing parameters fixed for the lifetime of a surface.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Color the buffer is cleared to and the eraser paints with
    pub background: Color,
    /// Stroke width for pen, eraser, and shape outlines
    pub line_width: f64,
    /// Font used by text placement
    pub font: FontDescriptor,
    /// Arrowhead appearance
    pub arrow: ArrowStyle,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            background: WHITE,
            line_width: 1.0,
            font: FontDescriptor::default(),
            arrow: ArrowStyle::default(),
        }
    }
}

/// The canvas buffer.
pub struct Surface {
    image: cairo::ImageSurface,
    ctx: cairo::Context,
    options: SurfaceOptions,
}

impl Surface {
    /// Creates a buffer of the given size filled with the background color.
    pub fn new(width: i32, height: i32, options: SurfaceOptions) -> Result<Self, SurfaceError> {
        let (image, ctx) = create_buffer(width, height)?;
        render::render_fill(&ctx, options.background);
        Ok(Self {
            image,
            ctx,
            options,
        })
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn background(&self) -> Color {
        self.options.background
    }

    /// Horizontal scale of the context's current matrix.
    pub fn current_scale(&self) -> f64 {
        self.ctx.matrix().xx()
    }

    /// Draws a segment straight into the buffer.
    pub fn stroke_segment(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
        render::render_segment(&self.ctx, from, to, color, width);
    }

    /// Strokes the outline of `kind` spanned by `origin` and the signed `extent`.
    pub fn stroke_shape_outline(
        &self,
        kind: ShapeKind,
        origin: (f64, f64),
        extent: (f64, f64),
        color: Color,
    ) {
        let shape = Shape::from_gesture(kind, origin, extent, &self.options.arrow);
        debug!("Stroking {:?}", shape);
        render::render_shape(&self.ctx, &shape, color, self.options.line_width);
    }

    /// Fills `text` with its baseline at `position`.
    pub fn place_text(&self, text: &str, position: (f64, f64), color: Color) {
        render::render_text(&self.ctx, text, position, color, &self.options.font);
    }

    /// Resets every pixel to the background, regardless of the current matrix.
    pub fn clear(&self) {
        let _ = self.ctx.save();
        self.ctx.identity_matrix();
        render::render_fill(&self.ctx, self.options.background);
        let _ = self.ctx.restore();
    }

    /// Encodes the current buffer.
    pub fn read_snapshot(&self) -> Result<Snapshot, SurfaceError> {
        let mut png = Vec::new();
        self.image
            .write_to_png(&mut png)
            .map_err(SurfaceError::Encode)?;
        Ok(Snapshot::from_png(png))
    }

    /// Decodes `snapshot` and overwrites the whole buffer with it.
    ///
    /// The snapshot is placed at the top-left corner in device space. A
    /// snapshot taken before a resize is clipped or padded with background.
    /// If decoding fails the buffer is left untouched.
    pub fn write_snapshot(&self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        let decoded = cairo::ImageSurface::create_from_png(&mut Cursor::new(snapshot.as_bytes()))
            .map_err(|err| {
                error!("Failed to decode snapshot ({} bytes): {}", snapshot.len(), err);
                SurfaceError::Decode(err)
            })?;

        self.ctx.save()?;
        self.ctx.identity_matrix();
        render::render_fill(&self.ctx, self.options.background);
        self.ctx.set_operator(cairo::Operator::Source);
        self.ctx.set_source_surface(&decoded, 0.0, 0.0)?;
        self.ctx.rectangle(
            0.0,
            0.0,
            decoded.width() as f64,
            decoded.height() as f64,
        );
        let result = self.ctx.fill();
        self.ctx.restore()?;
        result?;
        Ok(())
    }

    /// Replaces the buffer with one of the new size.
    ///
    /// Old pixels are copied to the top-left corner without remapping, the
    /// rest is background. The new context starts with an identity matrix.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        let (image, ctx) = create_buffer(width, height)?;
        render::render_fill(&ctx, self.options.background);
        ctx.set_source_surface(&self.image, 0.0, 0.0)?;
        ctx.paint()?;
        // Drop the pattern's reference to the old buffer
        ctx.set_source_rgb(0.0, 0.0, 0.0);

        debug!(
            "Resized surface {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.ctx = ctx;
        self.image = image;
        Ok(())
    }

    /// Reads back one pixel in device coordinates.
    ///
    /// Copies the whole buffer; use [`Surface::frame`] to inspect many pixels.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.frame().ok()?.get(x, y)
    }

    /// Reads back the whole buffer once, un-premultiplied.
    pub fn frame(&self) -> Result<Frame, SurfaceError> {
        let mut copy = self.copy_pixels()?;
        let (width, height) = (copy.width(), copy.height());
        let stride = copy.stride() as usize;
        let data = copy.data()?;

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in data.chunks(stride).take(height as usize) {
            pixels.extend(row[..width as usize * 4].chunks_exact(4).map(|px| {
                unpremultiply(u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
            }));
        }

        Ok(Frame {
            width,
            height,
            pixels,
        })
    }

    /// Independent copy of the current pixels, in device space.
    pub(crate) fn copy_pixels(&self) -> Result<cairo::ImageSurface, SurfaceError> {
        let (copy, ctx) = create_buffer(self.width(), self.height())?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(&self.image, 0.0, 0.0)?;
        ctx.paint()?;
        drop(ctx);
        copy.flush();
        Ok(copy)
    }

    /// The drawing context shared by every primitive.
    pub(crate) fn context(&self) -> &cairo::Context {
        &self.ctx
    }
}

fn create_buffer(
    width: i32,
    height: i32,
) -> Result<(cairo::ImageSurface, cairo::Context), SurfaceError> {
    if width <= 0 || height <= 0 {
        return Err(SurfaceError::InvalidSize { width, height });
    }
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let ctx = cairo::Context::new(&image)?;
    Ok((image, ctx))
}

fn unpremultiply(px: u32) -> Rgba {
    let a = (px >> 24) as u8;
    if a == 0 {
        return Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        };
    }
    let channel = |shift: u32| {
        let c = (px >> shift) & 0xff;
        ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
    };
    Rgba {
        r: channel(16),
        g: channel(8),
        b: channel(0),
        a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    fn surface(width: i32, height: i32) -> Surface {
        Surface::new(width, height, SurfaceOptions::default()).expect("surface")
    }

    const OPAQUE_WHITE: Rgba = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    #[test]
    fn new_surface_is_background() {
        let s = surface(20, 10);
        assert_eq!(s.pixel(0, 0), Some(OPAQUE_WHITE));
        assert_eq!(s.pixel(19, 9), Some(OPAQUE_WHITE));
        assert_eq!(s.pixel(20, 0), None);
    }

    #[test]
    fn frame_matches_single_pixel_reads() {
        let s = surface(12, 7);
        s.stroke_segment((0.0, 3.5), (12.0, 3.5), RED, 1.0);
        let frame = s.frame().unwrap();

        assert_eq!((frame.width(), frame.height()), (12, 7));
        assert_eq!(frame.pixels().len(), 12 * 7);
        for (x, y) in [(0, 0), (6, 3), (11, 6)] {
            assert_eq!(frame.get(x, y), s.pixel(x, y));
        }
        assert_eq!(frame.get(12, 0), None);
        assert_eq!(frame.get(6, 3).map(|p| (p.r, p.g)), Some((255, 0)));
    }

    #[test]
    fn rejects_empty_size() {
        assert!(matches!(
            Surface::new(0, 10, SurfaceOptions::default()),
            Err(SurfaceError::InvalidSize { .. })
        ));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let s = surface(30, 30);
        s.stroke_segment((0.0, 15.0), (30.0, 15.0), BLACK, 6.0);
        assert_ne!(s.pixel(15, 15), Some(OPAQUE_WHITE));
        s.clear();
        assert_eq!(s.pixel(15, 15), Some(OPAQUE_WHITE));
    }

    #[test]
    fn snapshot_restores_exact_pixels() {
        let s = surface(30, 30);
        s.stroke_segment((5.0, 5.0), (25.0, 25.0), RED, 3.0);
        let before = s.read_snapshot().unwrap();
        let probe = s.pixel(15, 15);

        s.clear();
        s.write_snapshot(&before).unwrap();

        assert_eq!(s.pixel(15, 15), probe);
        assert_eq!(s.read_snapshot().unwrap(), before);
    }

    #[test]
    fn corrupt_snapshot_leaves_buffer_untouched() {
        let s = surface(10, 10);
        s.stroke_segment((0.0, 5.0), (10.0, 5.0), BLACK, 4.0);
        let before = s.read_snapshot().unwrap();

        let garbage = Snapshot::from_png(b"definitely not a png".to_vec());
        assert!(matches!(
            s.write_snapshot(&garbage),
            Err(SurfaceError::Decode(_))
        ));
        assert_eq!(s.read_snapshot().unwrap(), before);
    }

    #[test]
    fn resize_keeps_top_left_content_and_pads() {
        let mut s = surface(20, 20);
        s.stroke_segment((0.0, 2.0), (20.0, 2.0), BLACK, 4.0);
        s.resize(40, 10).unwrap();

        assert_eq!((s.width(), s.height()), (40, 10));
        assert_eq!(s.pixel(10, 2).map(|p| p.r), Some(0));
        assert_eq!(s.pixel(30, 2), Some(OPAQUE_WHITE));
        assert_eq!(s.current_scale(), 1.0);
    }
}

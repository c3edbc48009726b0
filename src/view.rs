//! Zoom as a resampling of the raster buffer.
//!
//! Zooming does not replay any strokes. The current pixels are captured,
//! the drawing context is given a uniform scale, the buffer is cleared, and
//! the captured pixels are painted back through the scaled matrix. Repeated
//! zooms therefore accumulate resampling blur.
//!
//! The scaled matrix stays on the context afterwards: strokes drawn after a
//! zoom are scaled as well, so pointer coordinates no longer map 1:1 to
//! buffer pixels until the zoom is reset.

use crate::draw::{Surface, SurfaceError, render};
use log::debug;

/// Default multiplicative zoom step.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Tracks the single zoom factor applied to the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    step: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP)
    }
}

impl ViewTransform {
    /// Creates a transform at scale 1.0 zooming by `1 ± step`.
    pub fn new(step: f64) -> Self {
        Self { scale: 1.0, step }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Multiplies the scale by `factor` (or resets it to 1.0) and re-renders.
    ///
    /// Non-positive or non-finite factors are ignored so the scale stays
    /// positive.
    pub fn zoom(
        &mut self,
        surface: &Surface,
        factor: f64,
        reset: bool,
    ) -> Result<(), SurfaceError> {
        let captured = surface.copy_pixels()?;

        if reset {
            self.scale = 1.0;
        } else if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        } else {
            log::warn!("Ignoring invalid zoom factor {}", factor);
        }
        debug!("Zoom scale now {:.3}", self.scale);

        let ctx = surface.context();
        ctx.set_matrix(cairo::Matrix::new(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0));
        render::render_fill_rect(
            ctx,
            surface.width() as f64,
            surface.height() as f64,
            surface.background(),
        );

        ctx.save()?;
        ctx.set_source_surface(&captured, 0.0, 0.0)?;
        let painted = ctx.paint();
        ctx.restore()?;
        painted?;
        Ok(())
    }

    pub fn zoom_in(&mut self, surface: &Surface) -> Result<(), SurfaceError> {
        self.zoom(surface, 1.0 + self.step, false)
    }

    pub fn zoom_out(&mut self, surface: &Surface) -> Result<(), SurfaceError> {
        self.zoom(surface, 1.0 - self.step, false)
    }

    pub fn reset(&mut self, surface: &Surface) -> Result<(), SurfaceError> {
        self.zoom(surface, 1.0, true)
    }
}

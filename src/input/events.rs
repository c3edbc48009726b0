//! Pointer event types consumed by the gesture controller.

/// Where a pointer event came from.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSource {
    /// Mouse button/motion event
    Mouse,
    /// Touch event with its active touch points (first one wins)
    Touch { touches: Vec<(f64, f64)> },
}

/// A pointer event in surface-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Event position (for touch events, used when no touch point is listed)
    pub x: f64,
    pub y: f64,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            source: PointerSource::Mouse,
        }
    }

    /// A single-finger touch at `(x, y)`.
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            source: PointerSource::Touch {
                touches: vec![(x, y)],
            },
        }
    }

    /// The position the gesture should use.
    ///
    /// Only the first touch point is considered; there is no multi-touch.
    pub fn position(&self) -> (f64, f64) {
        match &self.source {
            PointerSource::Touch { touches } => touches.first().copied().unwrap_or((self.x, self.y)),
            PointerSource::Mouse => (self.x, self.y),
        }
    }
}

/// What the host should do after dispatching a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerResponse {
    /// Suppress the platform default (scrolling, pinch-zoom) for this event
    pub prevent_default: bool,
    /// Pixels changed and the buffer should be presented again
    pub redraw: bool,
}

impl PointerResponse {
    pub(crate) fn handled(redraw: bool) -> Self {
        Self {
            prevent_default: true,
            redraw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_uses_first_touch_point() {
        let event = PointerEvent {
            x: 0.0,
            y: 0.0,
            source: PointerSource::Touch {
                touches: vec![(3.0, 4.0), (9.0, 9.0)],
            },
        };
        assert_eq!(event.position(), (3.0, 4.0));
    }

    #[test]
    fn touch_end_without_points_falls_back_to_event_position() {
        let event = PointerEvent {
            x: 7.0,
            y: 8.0,
            source: PointerSource::Touch { touches: vec![] },
        };
        assert_eq!(event.position(), (7.0, 8.0));
    }
}

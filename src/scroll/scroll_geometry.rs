/// Snapshot of a horizontal scroll container, in distance units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_offset: f64,
    pub content_width: f64,
    pub viewport_width: f64,
}

impl ScrollGeometry {
    /// Returns `None` when the values cannot describe a laid-out container:
    /// non-finite or negative numbers, or a zero-width viewport.
    pub fn measure(scroll_offset: f64, content_width: f64, viewport_width: f64) -> Option<Self> {
        let values = [scroll_offset, content_width, viewport_width];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) || viewport_width == 0.0 {
            return None;
        }

        Some(Self {
            scroll_offset,
            content_width,
            viewport_width,
        })
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn has_overflow(&self) -> bool {
        self.content_width > self.viewport_width
    }
}

/// How a relative scroll request is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

use crate::scroll::ScrollGeometry;

/// Slack at the right edge, in distance units, inside which the right arrow
/// stays hidden
pub const SCROLL_BUFFER: f64 = 10.0;

/// Scroll geometry last seen by a carousel plus the derived arrow flags
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollViewState {
    pub scroll_offset: f64,
    pub content_width: f64,
    pub viewport_width: f64,
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow flags for a measured container
    pub fn derive(geometry: ScrollGeometry, buffer: f64) -> Self {
        Self {
            scroll_offset: geometry.scroll_offset,
            content_width: geometry.content_width,
            viewport_width: geometry.viewport_width,
            can_scroll_left: geometry.scroll_offset > 0.0,
            can_scroll_right: geometry.scroll_offset
                < geometry.content_width - geometry.viewport_width - buffer,
        }
    }

    /// Replace the state from a fresh measurement. Unmeasurable geometry
    /// counts as no overflow.
    pub fn update(&mut self, geometry: Option<ScrollGeometry>, buffer: f64) {
        *self = match geometry {
            Some(geometry) => Self::derive(geometry, buffer),
            None => Self::default(),
        };
    }
}

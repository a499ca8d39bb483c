//! Rendered areas of the carousel components

use ratatui::layout::Rect;

use crate::carousel::carousel_render::RenderedCarousel;

/// Identifies a clickable or scrollable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    CouponStrip,
    ScrollLeft,
    ScrollRight,
    /// Apply button of the card at this catalog index
    ApplyButton(usize),
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Controls are `None` while hidden, so a
/// click where a hidden arrow would be falls through to whatever is beneath.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct LayoutRegions {
    pub coupon_strip: Option<Rect>,
    pub scroll_left: Option<Rect>,
    pub scroll_right: Option<Rect>,
    pub apply_buttons: Vec<(usize, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record what the carousel renderer drew this frame
    pub fn record_carousel(&mut self, rendered: RenderedCarousel) {
        self.coupon_strip = Some(rendered.strip);
        self.scroll_left = rendered.scroll_left;
        self.scroll_right = rendered.scroll_right;
        self.apply_buttons = rendered.apply_buttons;
    }
}

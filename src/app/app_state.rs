use ratatui::layout::Rect;
use std::time::Duration;

use super::app_layout::ScreenLayout;
use crate::carousel::strip_layout::{CarouselAreas, CellScale};
use crate::carousel::{CarouselView, ScrollDirection};
use crate::config::{ClipboardBackend, Config};
use crate::coupon::Catalog;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::scroll::{ScrollBehavior, ScrollContainer, ScrollStrip};

/// Poll timeout while idle
pub const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Poll timeout while a smooth scroll is running, about 60 frames per second
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

pub struct App {
    pub catalog: Catalog,
    pub strip: ScrollStrip,
    pub carousel: CarouselView,
    pub scale: CellScale,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    /// Code of the most recently applied coupon
    pub applied: Option<String>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    /// Build the app for a terminal of size `area`. The carousel is mounted
    /// against a strip sized to that terminal.
    pub fn new(catalog: Catalog, config: &Config, area: Rect) -> Self {
        let metrics = config.carousel.metrics();
        let scale = config.carousel.cell_scale();
        let areas = CarouselAreas::new(ScreenLayout::new(area).carousel);

        let mut strip = ScrollStrip::new(
            metrics.content_width(catalog.len()),
            scale.to_units(areas.strip.width),
        )
        .with_animation(
            config.carousel.smooth_scroll,
            config.carousel.animation_speed,
        );
        let carousel = CarouselView::mount(&mut strip, metrics);

        #[cfg(debug_assertions)]
        log::debug!(
            "App created: {} coupon(s), content={} viewport={}",
            catalog.len(),
            strip.content_width(),
            strip.viewport_width()
        );

        Self {
            catalog,
            strip,
            carousel,
            scale,
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            applied: None,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn applied(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn poll_timeout(&self) -> Duration {
        if self.strip.is_animating() {
            ANIMATION_FRAME
        } else {
            EVENT_POLL_TIMEOUT
        }
    }

    /// Advance animations and expire notifications
    pub fn tick(&mut self) {
        self.strip.tick();
        self.sync_carousel();

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }
    }

    /// Feed pending scroll events to the carousel, re-rendering if any arrived
    pub fn sync_carousel(&mut self) {
        if self.carousel.pump(&self.strip) {
            self.mark_dirty();
        }
    }

    /// Match the strip viewport to the strip's on-screen width
    pub fn fit_viewport(&mut self, strip_cols: u16) {
        self.strip.set_viewport_width(self.scale.to_units(strip_cols));
        self.sync_carousel();
    }

    pub fn resize(&mut self, area: Rect) {
        let areas = CarouselAreas::new(ScreenLayout::new(area).carousel);

        #[cfg(debug_assertions)]
        log::debug!("Resize to {}x{}, strip {} cols", area.width, area.height, areas.strip.width);

        self.fit_viewport(areas.strip.width);
        self.mark_dirty();
    }

    /// Activate an arrow control. Hidden controls ignore activation.
    pub fn activate_control(&mut self, direction: ScrollDirection) -> bool {
        if !self.carousel.control_visible(direction) {
            return false;
        }

        #[cfg(debug_assertions)]
        log::debug!("Scroll {:?} from offset {}", direction, self.strip.offset());

        self.carousel.scroll(&mut self.strip, direction);
        self.sync_carousel();
        true
    }

    /// Direct scroll by the user, e.g. the mouse wheel
    pub fn user_scroll(&mut self, delta: f64) {
        self.strip.scroll_by(delta, ScrollBehavior::Instant);
        self.sync_carousel();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

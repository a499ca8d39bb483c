use super::observer::{ObserveError, ObserverRegistry, ScrollCause, ScrollEvent, ScrollObserver};
use super::scroll_container::ScrollContainer;
use super::scroll_geometry::{ScrollBehavior, ScrollGeometry};
use super::smooth_scroll::SmoothScroll;

pub const DEFAULT_ANIMATION_SPEED: f64 = 0.35;

/// Horizontally scrollable strip with clamped offset and smooth scrolling
///
/// Every offset or width change is reported to attached observers as a
/// [`ScrollEvent`]. Requests that leave the offset where it is emit nothing.
#[derive(Debug)]
pub struct ScrollStrip {
    offset: f64,
    content_width: f64,
    viewport_width: f64,
    animation: Option<SmoothScroll>,
    animation_speed: f64,
    smooth_enabled: bool,
    observers: ObserverRegistry,
    closed: bool,
}

impl ScrollStrip {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            offset: 0.0,
            content_width: content_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
            animation: None,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            smooth_enabled: true,
            observers: ObserverRegistry::new(),
            closed: false,
        }
    }

    /// Disabling smooth scrolling makes every request jump immediately
    pub fn with_animation(mut self, smooth_enabled: bool, speed: f64) -> Self {
        self.smooth_enabled = smooth_enabled;
        self.animation_speed = speed;
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where an in-flight smooth scroll will land
    pub fn animation_target(&self) -> Option<f64> {
        self.animation.as_ref().map(SmoothScroll::target)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        self.reclamp();
        self.emit(ScrollCause::Resize);
    }

    pub fn set_content_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if width == self.content_width {
            return;
        }
        self.content_width = width;
        self.reclamp();
        self.emit(ScrollCause::Content);
    }

    /// Advance a running smooth scroll by one frame. Returns true if the
    /// offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };

        let (next, settled) = animation.step(self.offset);
        if settled {
            self.animation = None;
        }

        if next == self.offset {
            return false;
        }
        self.offset = next;
        self.emit(ScrollCause::Animation);
        true
    }

    /// Tear the strip down. Observers are dropped and geometry becomes
    /// unavailable.
    pub fn close(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!(
            "Closing scroll strip with {} observer(s)",
            self.observers.active_count()
        );

        self.closed = true;
        self.animation = None;
        self.observers.detach_all();
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    fn reclamp(&mut self) {
        let max = self.max_offset();
        self.offset = self.offset.clamp(0.0, max);
        if let Some(animation) = &mut self.animation {
            let target = animation.target().clamp(0.0, max);
            animation.retarget(target);
        }
    }

    fn emit(&mut self, cause: ScrollCause) {
        if self.closed {
            return;
        }
        self.observers.notify(ScrollEvent {
            offset: self.offset,
            cause,
        });
    }
}

impl ScrollContainer for ScrollStrip {
    fn geometry(&self) -> Option<ScrollGeometry> {
        if self.closed {
            return None;
        }
        ScrollGeometry::measure(self.offset, self.content_width, self.viewport_width)
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        if self.closed || !delta.is_finite() {
            return;
        }

        match behavior {
            ScrollBehavior::Smooth if self.smooth_enabled => {
                // Requests issued mid-animation stack on the pending target
                let base = self.animation_target().unwrap_or(self.offset);
                let target = self.clamp(base + delta);

                match &mut self.animation {
                    Some(animation) => animation.retarget(target),
                    None if target != self.offset => {
                        self.animation = Some(SmoothScroll::new(target, self.animation_speed));
                    }
                    None => {}
                }
            }
            _ => {
                self.animation = None;
                let next = self.clamp(self.offset + delta);
                if next != self.offset {
                    self.offset = next;
                    self.emit(ScrollCause::User);
                }
            }
        }
    }

    fn observe(&mut self) -> Result<ScrollObserver, ObserveError> {
        if self.closed {
            return Err(ObserveError::ContainerClosed);
        }
        Ok(self.observers.attach())
    }

    fn observer_count(&self) -> usize {
        self.observers.active_count()
    }
}

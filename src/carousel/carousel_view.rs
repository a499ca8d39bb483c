use crate::scroll::{ScrollBehavior, ScrollContainer, ScrollObserver};

use super::carousel_metrics::{CarouselMetrics, ScrollDirection};
use super::view_state::ScrollViewState;

/// One mounted coupon carousel
///
/// The view holds the only observer registration it ever makes. Dropping the
/// view or calling [`unmount`](Self::unmount) releases it.
#[derive(Debug)]
pub struct CarouselView {
    state: ScrollViewState,
    metrics: CarouselMetrics,
    observer: Option<ScrollObserver>,
}

impl CarouselView {
    /// Attach to `container` and take the initial measurement.
    ///
    /// If the container refuses the observer, the view stays static: both
    /// arrows hidden and [`scroll`](Self::scroll) inert.
    pub fn mount<C: ScrollContainer + ?Sized>(container: &mut C, metrics: CarouselMetrics) -> Self {
        let observer = container
            .observe()
            .inspect_err(|_err| {
                #[cfg(debug_assertions)]
                log::warn!("Carousel mounted without scroll observer: {}", _err);
            })
            .ok();

        let mut view = Self {
            state: ScrollViewState::new(),
            metrics,
            observer,
        };

        if view.is_mounted() {
            view.on_scroll(container);

            #[cfg(debug_assertions)]
            log::debug!(
                "Carousel mounted: left={} right={}",
                view.state.can_scroll_left,
                view.state.can_scroll_right
            );
        }

        view
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_some()
    }

    pub fn state(&self) -> &ScrollViewState {
        &self.state
    }

    pub fn metrics(&self) -> &CarouselMetrics {
        &self.metrics
    }

    pub fn can_scroll_left(&self) -> bool {
        self.state.can_scroll_left
    }

    pub fn can_scroll_right(&self) -> bool {
        self.state.can_scroll_right
    }

    /// Whether the arrow for `direction` is currently shown
    pub fn control_visible(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => self.state.can_scroll_left,
            ScrollDirection::Right => self.state.can_scroll_right,
        }
    }

    /// Re-read the container geometry and recompute the arrow flags
    pub fn on_scroll<C: ScrollContainer + ?Sized>(&mut self, container: &C) {
        if !self.is_mounted() {
            return;
        }
        self.state
            .update(container.geometry(), self.metrics.scroll_buffer);
    }

    /// Ask the container for a smooth scroll of one step. The container does
    /// the clamping.
    pub fn scroll<C: ScrollContainer + ?Sized>(&self, container: &mut C, direction: ScrollDirection) {
        if !self.is_mounted() {
            return;
        }

        let delta = direction.delta(self.metrics.scroll_step);

        #[cfg(debug_assertions)]
        log::debug!("Carousel scroll {:?} by {}", direction, delta);

        container.scroll_by(delta, ScrollBehavior::Smooth);
    }

    /// Handle every scroll event queued since the last call, in order.
    /// Returns true if any event was handled.
    pub fn pump<C: ScrollContainer + ?Sized>(&mut self, container: &C) -> bool {
        let Some(observer) = &self.observer else {
            return false;
        };

        let events = observer.drain();
        for _event in &events {
            self.on_scroll(container);
        }
        !events.is_empty()
    }

    /// Release the scroll observer. Later events are never seen.
    pub fn unmount(&mut self) {
        if self.observer.take().is_some() {
            #[cfg(debug_assertions)]
            log::debug!("Carousel unmounted");
        }
    }
}

//! Coupon carousel
//!
//! `CarouselView` owns the arrow-visibility state for one mounted carousel.
//! It reads geometry from a [`ScrollContainer`](crate::scroll::ScrollContainer)
//! and recomputes `can_scroll_left` / `can_scroll_right` on every scroll event.

mod carousel_metrics;
pub mod carousel_render;
mod carousel_view;
pub mod strip_layout;
mod view_state;

pub use carousel_metrics::{CARD_GAP, CARD_WIDTH, CarouselMetrics, SCROLL_STEP, ScrollDirection};
pub use carousel_view::CarouselView;
pub use view_state::{SCROLL_BUFFER, ScrollViewState};

//! Horizontal scroll container primitives
//!
//! `ScrollStrip` is the concrete container the carousel scrolls. Views talk to
//! it through the [`ScrollContainer`] trait and learn about offset changes
//! through a [`ScrollObserver`], which detaches itself when dropped.

mod observer;
mod scroll_container;
mod scroll_geometry;
mod scroll_strip;
mod smooth_scroll;

pub use observer::{ObserveError, ObserverRegistry, ScrollCause, ScrollEvent, ScrollObserver};
pub use scroll_container::ScrollContainer;
pub use scroll_geometry::{ScrollBehavior, ScrollGeometry};
pub use scroll_strip::{DEFAULT_ANIMATION_SPEED, ScrollStrip};
pub use smooth_scroll::SmoothScroll;

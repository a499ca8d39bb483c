//! promobar library - coupon carousel with scroll-aware arrow controls
//!
//! This library exposes the core functionality of promobar for testing purposes.

pub mod app;
pub mod carousel;
pub mod clipboard;
pub mod config;
pub mod coupon;
pub mod error;
pub mod layout;
pub mod notification;
pub mod scroll;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use carousel::{CarouselView, ScrollDirection, ScrollViewState};
pub use config::Config;
pub use coupon::{Catalog, CatalogProvider, CouponRecord};
pub use scroll::{ScrollContainer, ScrollStrip};

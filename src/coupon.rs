//! Coupon catalog module
//!
//! Holds the coupon records shown by the carousel and the providers that
//! supply them. The carousel only ever sees a validated, ordered [`Catalog`].

mod builtin;
mod catalog;
mod coupon_record;

pub use builtin::BuiltinCatalog;
pub use catalog::{Catalog, CatalogError, CatalogProvider, FileCatalog};
pub use coupon_record::{Accent, CouponId, CouponRecord, Presentation};

#[cfg(test)]
#[path = "coupon/catalog_tests.rs"]
mod catalog_tests;

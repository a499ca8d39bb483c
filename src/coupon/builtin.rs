use super::catalog::{Catalog, CatalogError, CatalogProvider};
use super::coupon_record::{Accent, CouponRecord};

/// The coupons shipped with the binary, used when no catalog file is given
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    fn records() -> Vec<CouponRecord> {
        vec![
            CouponRecord::new(
                1,
                "WELCOME50",
                "50% off on your first order",
                "₹200",
                "₹399",
                "2 days",
            )
            .with_accent(Accent::Purple),
            CouponRecord::new(
                2,
                "FLASH30",
                "30% off on all shoes",
                "₹500",
                "₹999",
                "12 hours",
            )
            .with_accent(Accent::Amber),
            CouponRecord::new(
                3,
                "WEEKEND20",
                "20% off on weekend shopping",
                "₹350",
                "₹799",
                "3 days",
            )
            .with_accent(Accent::Teal),
        ]
    }
}

impl CatalogProvider for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(Self::records())
    }
}

//! Tests for catalog loading and validation

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

const TWO_COUPONS: &str = r#"[
    {
        "id": 7,
        "code": "SPRING10",
        "description": "10% off sitewide",
        "maxDiscount": "₹100",
        "minOrder": "₹499",
        "expiresIn": "5 days",
        "presentation": { "accent": "pink", "label": "Hot" }
    },
    {
        "id": 3,
        "code": "SHIPFREE",
        "description": "Free delivery",
        "maxDiscount": "₹60",
        "minOrder": "₹0",
        "expiresIn": "1 week"
    }
]"#;

#[test]
fn test_builtin_catalog_order() {
    let catalog = BuiltinCatalog.load().unwrap();

    let codes: Vec<&str> = catalog.coupons().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["WELCOME50", "FLASH30", "WEEKEND20"]);
}

#[test]
fn test_builtin_catalog_fields() {
    let catalog = BuiltinCatalog.load().unwrap();
    let flash = catalog.get(1).unwrap();

    assert_eq!(flash.id, CouponId(2));
    assert_eq!(flash.description, "30% off on all shoes");
    assert_eq!(flash.bounds_line(), "Max: ₹500 | Min: ₹999");
    assert_eq!(flash.expiry_line(), "Expires: 12 hours");
    assert_eq!(flash.presentation.accent, Accent::Amber);
    assert_eq!(flash.presentation.label, "New");
}

#[test]
fn test_duplicate_ids_rejected() {
    let coupons = vec![
        CouponRecord::new(1, "A", "a", "₹1", "₹1", "1 day"),
        CouponRecord::new(2, "B", "b", "₹1", "₹1", "1 day"),
        CouponRecord::new(1, "C", "c", "₹1", "₹1", "1 day"),
    ];

    let result = Catalog::new(coupons);
    assert!(matches!(result, Err(CatalogError::DuplicateId(CouponId(1)))));
}

#[test]
fn test_from_json_keeps_file_order() {
    let catalog = Catalog::from_json(TWO_COUPONS).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0).unwrap().id, CouponId(7));
    assert_eq!(catalog.get(1).unwrap().id, CouponId(3));
}

#[test]
fn test_from_json_camel_case_fields() {
    let catalog = Catalog::from_json(TWO_COUPONS).unwrap();
    let spring = catalog.get(0).unwrap();

    assert_eq!(spring.max_discount, "₹100");
    assert_eq!(spring.min_order, "₹499");
    assert_eq!(spring.expires_in, "5 days");
    assert_eq!(spring.presentation.accent, Accent::Pink);
    assert_eq!(spring.presentation.label, "Hot");
}

#[test]
fn test_from_json_presentation_defaults() {
    let catalog = Catalog::from_json(TWO_COUPONS).unwrap();

    assert_eq!(catalog.get(1).unwrap().presentation, Presentation::default());
}

#[test]
fn test_from_json_empty_array_is_valid() {
    let catalog = Catalog::from_json("[]").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog, Catalog::empty());
}

#[test]
fn test_from_json_missing_field_is_parse_error() {
    let result = Catalog::from_json(r#"[{"id": 1, "code": "X"}]"#);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_from_json_unknown_accent_is_parse_error() {
    let json = r#"[{
        "id": 1, "code": "X", "description": "x", "maxDiscount": "₹1",
        "minOrder": "₹1", "expiresIn": "1 day", "presentation": {"accent": "plaid"}
    }]"#;
    assert!(matches!(
        Catalog::from_json(json),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_file_catalog_loads_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TWO_COUPONS.as_bytes()).unwrap();

    let catalog = FileCatalog::new(file.path()).load().unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_file_catalog_missing_file() {
    let provider = FileCatalog::new("/definitely/not/here/coupons.json");

    let err = provider.load().unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().starts_with("Failed to read catalog"));
}

#[test]
fn test_error_messages() {
    let err = Catalog::from_json("not json").unwrap_err();
    assert!(err.to_string().starts_with("Invalid catalog:"));

    let err = CatalogError::DuplicateId(CouponId(4));
    assert_eq!(err.to_string(), "Invalid catalog: duplicate coupon id 4");
}

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::coupon_record::{CouponId, CouponRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: duplicate coupon id {0}")]
    DuplicateId(CouponId),
}

/// Ordered coupon sequence with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    coupons: Vec<CouponRecord>,
}

impl Catalog {
    /// Keeps the given order. Fails on the first repeated id.
    pub fn new(coupons: Vec<CouponRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(coupons.len());
        for coupon in &coupons {
            if !seen.insert(coupon.id) {
                return Err(CatalogError::DuplicateId(coupon.id));
            }
        }
        Ok(Self { coupons })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of coupon records (camelCase keys)
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let coupons: Vec<CouponRecord> = serde_json::from_str(json)?;
        Self::new(coupons)
    }

    pub fn coupons(&self) -> &[CouponRecord] {
        &self.coupons
    }

    pub fn get(&self, index: usize) -> Option<&CouponRecord> {
        self.coupons.get(index)
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

/// Source of coupon records for the carousel
pub trait CatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Catalog stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for FileCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        #[cfg(debug_assertions)]
        log::debug!("Loading catalog from {:?}", self.path);

        let contents = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let catalog = Catalog::from_json(&contents)?;

        #[cfg(debug_assertions)]
        log::debug!("Catalog loaded with {} coupons", catalog.len());

        Ok(catalog)
    }
}

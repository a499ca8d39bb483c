use thiserror::Error;

use crate::coupon::CatalogError;

#[derive(Debug, Error)]
pub enum PromobarError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

use crate::cart::errors::CartError;
use crate::catalog::errors::CatalogError;

/// Top-level error for order operations.
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    #[error("Cart not found for account: {0}")]
    CartNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<CartError> for OrderError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::NotFound(account) => OrderError::CartNotFound(account),
            CartError::ProductNotFound(product) => OrderError::ProductNotFound(product),
            CartError::DatabaseError(msg) => OrderError::DatabaseError(msg),
        }
    }
}

impl From<CatalogError> for OrderError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(product) => OrderError::ProductNotFound(product),
            CatalogError::InvalidProductData(msg) | CatalogError::DatabaseError(msg) => {
                OrderError::DatabaseError(msg)
            }
        }
    }
}

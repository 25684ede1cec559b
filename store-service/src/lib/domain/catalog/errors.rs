use thiserror::Error;

/// Top-level error for catalog operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Invalid product data: {0}")]
    InvalidProductData(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

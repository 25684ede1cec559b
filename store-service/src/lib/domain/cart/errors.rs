use thiserror::Error;

/// Top-level error for cart operations.
#[derive(Debug, Clone, Error)]
pub enum CartError {
    #[error("Cart not found for account: {0}")]
    NotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

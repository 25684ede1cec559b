use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::NewProduct;
use crate::catalog::models::Product;
use crate::catalog::models::ProductId;

/// Port for catalog domain service operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// Retrieve all products.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Create a new product.
    ///
    /// # Errors
    /// * `InvalidProductData` - Blank name or negative price
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, product: NewProduct) -> Result<Product, CatalogError>;

    /// Retrieve a product by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Retrieve all products.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;
}

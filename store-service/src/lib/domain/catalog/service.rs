use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::NewProduct;
use crate::catalog::models::Product;
use crate::catalog::ports::CatalogServicePort;
use crate::catalog::ports::ProductRepository;

/// Domain service implementation for catalog operations.
pub struct CatalogService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> CatalogService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> CatalogServicePort for CatalogService<PR>
where
    PR: ProductRepository,
{
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.repository.list_all().await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        if product.name.trim().is_empty() {
            return Err(CatalogError::InvalidProductData(
                "Product name must not be blank".to_string(),
            ));
        }
        if product.price < Decimal::ZERO {
            return Err(CatalogError::InvalidProductData(
                "Product price must not be negative".to_string(),
            ));
        }

        self.repository.create(product).await
    }
}

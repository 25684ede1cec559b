use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::models::Product;

pub mod create_product;
pub mod list_products;

/// HTTP view of a catalog product, shared by the product handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::ProductData;
use crate::catalog::models::NewProduct;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Create a new catalog product.
///
/// Serves both the staff route and the public test route.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .catalog_service
        .create_product(NewProduct {
            name: body.name,
            price: body.price,
        })
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProductRequestBody {
    name: String,
    price: Decimal,
}

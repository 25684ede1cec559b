use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CartData;
use crate::account::models::Identity;
use crate::cart::ports::CartServicePort;
use crate::catalog::models::ProductId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Add a product to the calling account's cart.
pub async fn add_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<AddCartItemRequestBody>,
) -> Result<ApiSuccess<CartData>, ApiError> {
    state
        .cart_service
        .add_item(identity.account_id, ProductId(body.product_id), body.quantity)
        .await
        .map_err(ApiError::from)
        .map(|ref cart| ApiSuccess::new(StatusCode::OK, cart.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddCartItemRequestBody {
    pub product_id: i64,
    pub quantity: i32,
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CartData;
use crate::cart::ports::CartServicePort;
use crate::catalog::models::ProductId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::GUEST_ACCOUNT_ID;
use crate::inbound::http::router::AppState;

/// Public test endpoint: add a product to the guest account's cart.
pub async fn public_add_item(
    State(state): State<AppState>,
    Json(body): Json<PublicCartItemRequestBody>,
) -> Result<ApiSuccess<CartData>, ApiError> {
    state
        .cart_service
        .add_item(GUEST_ACCOUNT_ID, ProductId(body.product_id), body.quantity)
        .await
        .map_err(ApiError::from)
        .map(|ref cart| ApiSuccess::new(StatusCode::OK, cart.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicCartItemRequestBody {
    pub product_id: i64,
    pub quantity: i32,
}

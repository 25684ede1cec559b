use axum::extract::State;
use axum::http::StatusCode;

use super::OrderData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::GUEST_ACCOUNT_ID;
use crate::inbound::http::router::AppState;
use crate::order::ports::OrderServicePort;

/// Public test endpoint: place an order from the guest account's cart.
pub async fn public_create_order(
    State(state): State<AppState>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    state
        .order_service
        .place_order_from_cart(GUEST_ACCOUNT_ID)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

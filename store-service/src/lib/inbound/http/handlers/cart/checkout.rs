use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::account::models::Identity;
use crate::inbound::http::handlers::orders::OrderData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::order::ports::OrderServicePort;

/// Place an order from the calling account's cart.
pub async fn checkout(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    state
        .order_service
        .place_order_from_cart(identity.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::OrderData;
use crate::account::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::order::ports::OrderServicePort;

/// Retrieve the calling account's orders.
pub async fn list_my_orders(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    state
        .order_service
        .orders_for_account(identity.account_id)
        .await
        .map_err(ApiError::from)
        .map(|orders| {
            ApiSuccess::new(StatusCode::OK, orders.iter().map(OrderData::from).collect())
        })
}

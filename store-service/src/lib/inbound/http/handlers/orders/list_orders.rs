use axum::extract::State;
use axum::http::StatusCode;

use super::OrderData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::order::ports::OrderServicePort;

/// Public test listing of every order in the system.
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    state
        .order_service
        .list_all_orders()
        .await
        .map_err(ApiError::from)
        .map(|orders| {
            ApiSuccess::new(StatusCode::OK, orders.iter().map(OrderData::from).collect())
        })
}

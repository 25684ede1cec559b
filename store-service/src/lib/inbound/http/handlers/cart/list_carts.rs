use axum::extract::State;
use axum::http::StatusCode;

use super::CartData;
use crate::cart::ports::CartServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Public test listing of every cart in the system.
pub async fn list_carts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CartData>>, ApiError> {
    state
        .cart_service
        .list_all_carts()
        .await
        .map_err(ApiError::from)
        .map(|carts| {
            ApiSuccess::new(StatusCode::OK, carts.iter().map(CartData::from).collect())
        })
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::CartData;
use crate::account::models::Identity;
use crate::cart::ports::CartServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Retrieve the calling account's cart.
///
/// Owner scoping comes from the attached identity, never from request
/// parameters.
pub async fn get_cart(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<CartData>, ApiError> {
    state
        .cart_service
        .get_cart(identity.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref cart| ApiSuccess::new(StatusCode::OK, cart.into()))
}

use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::ProductData;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// List all products.
///
/// Serves both the staff route and the public listing; the rule is the
/// route's concern, not the handler's. Responses are marked
/// non-cacheable.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .catalog_service
        .list_products()
        .await
        .map_err(ApiError::from)?;

    let data: Vec<ProductData> = products.iter().map(ProductData::from).collect();

    Ok((
        [
            (header::CACHE_CONTROL, "no-store"),
            (header::PRAGMA, "no-cache"),
        ],
        ApiSuccess::new(StatusCode::OK, data),
    ))
}

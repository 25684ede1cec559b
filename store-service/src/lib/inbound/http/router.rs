use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Extension;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::gate;
use super::gate::RouteRule;
use super::handlers::auth::list_accounts::list_accounts;
use super::handlers::auth::list_accounts_public::list_accounts_public;
use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::cart::add_item::add_item;
use super::handlers::cart::checkout::checkout;
use super::handlers::cart::get_cart::get_cart;
use super::handlers::cart::list_carts::list_carts;
use super::handlers::cart::public_add_item::public_add_item;
use super::handlers::orders::list_my_orders::list_my_orders;
use super::handlers::orders::list_orders::list_orders;
use super::handlers::orders::public_create_order::public_create_order;
use super::handlers::products::create_product::create_product;
use super::handlers::products::list_products::list_products;
use super::handlers::ApiError;
use super::middleware::attach_identity;
use crate::account::models::Identity;
use crate::account::service::AccountService;
use crate::cart::service::CartService;
use crate::catalog::service::CatalogService;
use crate::order::service::OrderService;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresCartRepository;
use crate::outbound::repositories::PostgresOrderRepository;
use crate::outbound::repositories::PostgresProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresAccountRepository>>,
    pub catalog_service: Arc<CatalogService<PostgresProductRepository>>,
    pub cart_service: Arc<CartService<PostgresCartRepository, PostgresProductRepository>>,
    pub order_service:
        Arc<OrderService<PostgresOrderRepository, PostgresCartRepository, PostgresProductRepository>>,
    pub token_codec: Arc<TokenCodec>,
    pub exempt_prefixes: Arc<Vec<String>>,
}

/// Build the application router.
///
/// The route groups below are the static rule table: public routes carry
/// no gate, every other group carries exactly one [`RouteRule`] layer.
/// The identity middleware wraps the whole router and runs first.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/users/public", get(list_accounts_public))
        .route("/products/public", get(list_products))
        .route("/products/public-add", post(create_product))
        .route("/api/cart/all", get(list_carts))
        .route("/api/cart/public-add", post(public_add_item))
        .route("/api/orders/all", get(list_orders))
        .route("/api/orders/public-create", post(public_create_order));

    let admin_routes = Router::new()
        .route("/auth/users", get(list_accounts))
        .route_layer(middleware::from_fn(|req, next| {
            gate::enforce(RouteRule::RoleIn(gate::ADMIN_ONLY), req, next)
        }));

    let staff_routes = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route_layer(middleware::from_fn(|req, next| {
            gate::enforce(RouteRule::RoleIn(gate::STAFF), req, next)
        }));

    let authenticated_routes = Router::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart/add", post(add_item))
        .route("/api/cart/checkout", post(checkout))
        .route("/api/orders", get(list_my_orders))
        .route_layer(middleware::from_fn(|req, next| {
            gate::enforce(RouteRule::Authenticated, req, next)
        }));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // account_id is recorded by the identity middleware once a
            // token has been validated.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                account_id = tracing::field::Empty,
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(staff_routes)
        .merge(authenticated_routes)
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            attach_identity,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unmatched paths follow the default rule: authentication required.
async fn fallback(identity: Option<Extension<Identity>>) -> ApiError {
    match identity {
        None => ApiError::Unauthorized("Authentication required".to_string()),
        Some(_) => ApiError::NotFound("No such route".to_string()),
    }
}

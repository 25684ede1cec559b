//! Request identity middleware + authorization gate behavior, driven
//! through a real router with `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use store_service::inbound::http::gate;
use store_service::inbound::http::gate::RouteRule;
use store_service::inbound::http::middleware::attach_identity;
use store_service::inbound::http::router::create_router;
use tower::ServiceExt;

/// Probe router mirroring the production layering: one public route
/// under an exempt prefix, one admin-only route, one any-identity
/// route, identity middleware around all of it.
fn probe_router() -> Router {
    let state = common::test_state();

    let admin_routes = Router::new()
        .route("/admin/probe", get(|| async { "admin" }))
        .route_layer(middleware::from_fn(|req, next| {
            gate::enforce(RouteRule::RoleIn(gate::ADMIN_ONLY), req, next)
        }));

    let authenticated_routes = Router::new()
        .route("/any/probe", get(|| async { "any" }))
        .route_layer(middleware::from_fn(|req, next| {
            gate::enforce(RouteRule::Authenticated, req, next)
        }));

    Router::new()
        .route("/auth/ping", get(|| async { "public" }))
        .merge(admin_routes)
        .merge(authenticated_routes)
        .layer(middleware::from_fn_with_state(state, attach_identity))
}

fn request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn exempt_path_passes_without_token() {
    let response = probe_router()
        .oneshot(request("/auth/ping", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn exempt_path_ignores_garbled_token() {
    // No token inspection happens on exempt paths; garbage is fine.
    let response = probe_router()
        .oneshot(request("/auth/ping", Some("not.a.token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn exempt_path_ignores_expired_token() {
    let token = common::expired_token("CLIENT");
    let response = probe_router()
        .oneshot(request("/auth/ping", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let response = probe_router()
        .oneshot(request("/any/probe", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbled_token_is_anonymous_not_an_error() {
    // The middleware swallows the invalid token; the 401 comes from the
    // gate, not from token parsing.
    let response = probe_router()
        .oneshot(request("/any/probe", Some("garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_anonymous() {
    let token = common::expired_token("ADMIN");
    let response = probe_router()
        .oneshot(request("/any/probe", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_prefixed_header_is_not_stripped() {
    // The header value is the raw token; a "Bearer " prefix makes it
    // unparseable and the request stays anonymous.
    let token = format!("Bearer {}", common::token_for("ADMIN"));
    let response = probe_router()
        .oneshot(request("/any/probe", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn client_role_is_forbidden_on_admin_route() {
    let token = common::token_for("CLIENT");
    let response = probe_router()
        .oneshot(request("/admin/probe", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn client_role_passes_authenticated_route() {
    let token = common::token_for("CLIENT");
    let response = probe_router()
        .oneshot(request("/any/probe", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_role_passes_admin_route() {
    let token = common::token_for("ADMIN");
    let response = probe_router()
        .oneshot(request("/admin/probe", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmatched_path_without_identity_is_unauthorized() {
    let app = create_router(common::test_state());

    let response = app.oneshot(request("/nope", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unauthorized_response_carries_error_envelope() {
    let response = probe_router()
        .oneshot(request("/any/probe", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status_code"], 401);
    assert_eq!(body["data"]["message"], "Authentication required");
}

#[tokio::test]
async fn unmatched_path_with_identity_is_not_found() {
    let app = create_router(common::test_state());
    let token = common::token_for("CLIENT");

    let response = app.oneshot(request("/nope", Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

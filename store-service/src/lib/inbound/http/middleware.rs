use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::account::models::AccountId;
use crate::account::models::Identity;
use crate::account::models::Role;
use crate::inbound::http::router::AppState;

/// Request identity middleware.
///
/// Attaches a verified [`Identity`] to the request extensions when a
/// valid bearer token is present. This layer never rejects a request:
/// an absent, malformed, or expired token leaves the request anonymous,
/// and the authorization gate decides its fate per route.
///
/// Paths matching a configured exempt prefix pass through without any
/// token inspection at all.
pub async fn attach_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if state
        .exempt_prefixes
        .iter()
        .any(|prefix| path.starts_with(prefix.as_str()))
    {
        return next.run(req).await;
    }

    // The Authorization header value is the raw signed token; clients
    // send it without a "Bearer " prefix.
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    if let Some(token) = token {
        if state.token_codec.validate(token) {
            // Extraction cannot fail on a token that just validated.
            if let (Ok(subject), Ok(role)) = (
                state.token_codec.extract_subject(token),
                state.token_codec.extract_role(token),
            ) {
                if let Ok(account_id) = AccountId::from_string(&subject) {
                    // Expose the subject id to the request span for the
                    // logging layer.
                    tracing::Span::current()
                        .record("account_id", tracing::field::display(&subject));

                    req.extensions_mut().insert(Identity {
                        account_id,
                        role: Role::parse(&role),
                    });
                }
            }
        } else {
            tracing::debug!("Ignoring invalid bearer token");
        }
    }

    next.run(req).await
}

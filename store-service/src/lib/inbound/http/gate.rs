use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::account::models::Identity;
use crate::account::models::Role;
use crate::inbound::http::handlers::ApiError;

/// Declarative access rule for a route group.
///
/// `Public` routes simply carry no gate layer. The gate runs after the
/// identity middleware and before the handler, exactly once per request.
#[derive(Debug, Clone, Copy)]
pub enum RouteRule {
    /// Any attached identity is enough, whatever its role.
    Authenticated,
    /// The attached identity's role must be a member of the set.
    RoleIn(&'static [Role]),
}

/// Roles allowed to manage the catalog.
pub const STAFF: &[Role] = &[Role::Admin, Role::Employee];

/// Roles allowed on admin-only routes.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Enforce a route rule against the request's attached identity.
///
/// No identity yields 401; an identity whose role is outside the rule's
/// set yields 403. The handler is not invoked on failure.
pub async fn enforce(rule: RouteRule, req: Request, next: Next) -> Result<Response, ApiError> {
    let identity = req.extensions().get::<Identity>().copied();

    match rule {
        RouteRule::Authenticated => {
            if identity.is_none() {
                return Err(ApiError::Unauthorized(
                    "Authentication required".to_string(),
                ));
            }
        }
        RouteRule::RoleIn(allowed) => match identity {
            None => {
                return Err(ApiError::Unauthorized(
                    "Authentication required".to_string(),
                ));
            }
            Some(identity) if !allowed.contains(&identity.role) => {
                return Err(ApiError::Forbidden("Insufficient role".to_string()));
            }
            Some(_) => {}
        },
    }

    Ok(next.run(req).await)
}

//! Declarative route authorization.
//!
//! Every route's access level lives in [`ROUTE_POLICIES`]; a single
//! [`enforce_policy`] layer on the router consults the table by matched
//! path and method. Handlers never carry their own role checks — they
//! only enforce ownership (is this resource the caller's).

use axum::{
    extract::{FromRequestParts, MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::require_role;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Access level required by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No token required.
    Public,
    /// Any valid bearer token.
    Authenticated,
    /// A valid bearer token whose owner has exactly this role.
    Role(UserRole),
}

/// The authorization policy for every route, keyed by method and matched
/// path pattern.
pub const ROUTE_POLICIES: &[(&str, &str, RouteAccess)] = &[
    ("POST", "/api/auth/token", RouteAccess::Public),
    ("POST", "/api/users", RouteAccess::Public),
    ("GET", "/api/users", RouteAccess::Role(UserRole::Admin)),
    ("GET", "/api/users/admin/{email}", RouteAccess::Authenticated),
    (
        "GET",
        "/api/users/instructor/{email}",
        RouteAccess::Authenticated,
    ),
    ("PATCH", "/api/users/{id}/admin", RouteAccess::Role(UserRole::Admin)),
    (
        "PATCH",
        "/api/users/{id}/instructor",
        RouteAccess::Role(UserRole::Admin),
    ),
    ("POST", "/api/classes", RouteAccess::Role(UserRole::Instructor)),
    ("GET", "/api/classes", RouteAccess::Role(UserRole::Admin)),
    ("GET", "/api/classes/approved", RouteAccess::Public),
    ("GET", "/api/classes/mine", RouteAccess::Role(UserRole::Instructor)),
    ("GET", "/api/classes/{id}", RouteAccess::Role(UserRole::Instructor)),
    ("PATCH", "/api/classes/{id}", RouteAccess::Role(UserRole::Instructor)),
    (
        "PATCH",
        "/api/classes/{id}/status",
        RouteAccess::Role(UserRole::Admin),
    ),
    (
        "PATCH",
        "/api/classes/{id}/feedback",
        RouteAccess::Role(UserRole::Admin),
    ),
    ("GET", "/api/selections", RouteAccess::Authenticated),
    ("POST", "/api/selections", RouteAccess::Authenticated),
    ("GET", "/api/selections/{id}", RouteAccess::Authenticated),
    ("DELETE", "/api/selections/{id}", RouteAccess::Authenticated),
    ("PATCH", "/api/selections/{id}", RouteAccess::Authenticated),
    ("POST", "/api/payments/intent", RouteAccess::Authenticated),
    ("POST", "/api/payments", RouteAccess::Authenticated),
    ("GET", "/api/payments", RouteAccess::Authenticated),
];

/// Looks up the access level for a route. Routes absent from the table
/// (docs UI, unmatched paths) are public.
pub fn route_access(method: &Method, matched_path: &str) -> RouteAccess {
    ROUTE_POLICIES
        .iter()
        .find(|(m, p, _)| *m == method.as_str() && *p == matched_path)
        .map(|(_, _, access)| *access)
        .unwrap_or(RouteAccess::Public)
}

/// Router-wide middleware enforcing [`ROUTE_POLICIES`].
pub async fn enforce_policy(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    match route_access(req.method(), &matched_path) {
        RouteAccess::Public => Ok(next.run(req).await),
        RouteAccess::Authenticated => {
            let (mut parts, body) = req.into_parts();
            AuthUser::from_request_parts(&mut parts, &state).await?;
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
        RouteAccess::Role(expected) => {
            let (mut parts, body) = req.into_parts();
            let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
            require_role(state.roles.as_ref(), auth_user.email(), expected).await?;
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_routes_require_admin() {
        assert_eq!(
            route_access(&Method::GET, "/api/users"),
            RouteAccess::Role(UserRole::Admin)
        );
        assert_eq!(
            route_access(&Method::PATCH, "/api/users/{id}/admin"),
            RouteAccess::Role(UserRole::Admin)
        );
        assert_eq!(
            route_access(&Method::PATCH, "/api/classes/{id}/status"),
            RouteAccess::Role(UserRole::Admin)
        );
    }

    #[test]
    fn test_instructor_routes_require_instructor() {
        assert_eq!(
            route_access(&Method::POST, "/api/classes"),
            RouteAccess::Role(UserRole::Instructor)
        );
        assert_eq!(
            route_access(&Method::GET, "/api/classes/mine"),
            RouteAccess::Role(UserRole::Instructor)
        );
    }

    #[test]
    fn test_method_distinguishes_policy() {
        // Registration is open; listing users is not.
        assert_eq!(route_access(&Method::POST, "/api/users"), RouteAccess::Public);
        assert_eq!(
            route_access(&Method::GET, "/api/users"),
            RouteAccess::Role(UserRole::Admin)
        );
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(
            route_access(&Method::GET, "/api/classes/approved"),
            RouteAccess::Public
        );
        assert_eq!(
            route_access(&Method::POST, "/api/auth/token"),
            RouteAccess::Public
        );
    }

    #[test]
    fn test_unlisted_routes_are_public() {
        assert_eq!(route_access(&Method::GET, "/swagger-ui"), RouteAccess::Public);
        assert_eq!(route_access(&Method::GET, "/no/such/route"), RouteAccess::Public);
    }

    #[test]
    fn test_selection_routes_require_token() {
        for method in [Method::GET, Method::DELETE, Method::PATCH] {
            assert_eq!(
                route_access(&method, "/api/selections/{id}"),
                RouteAccess::Authenticated
            );
        }
    }
}

mod common;

use axum::http::{Method, StatusCode};
use common::StaticRoleStore;
use sportscamp::middleware::policy::{ROUTE_POLICIES, RouteAccess, route_access};
use sportscamp::middleware::role::require_role;
use sportscamp::modules::users::model::UserRole;

#[test]
fn test_every_api_route_is_listed_once() {
    for (method, path, _) in ROUTE_POLICIES {
        let duplicates = ROUTE_POLICIES
            .iter()
            .filter(|(m, p, _)| m == method && p == path)
            .count();
        assert_eq!(duplicates, 1, "{method} {path} listed more than once");
    }
}

#[test]
fn test_promotion_routes_are_admin_only() {
    assert_eq!(
        route_access(&Method::PATCH, "/api/users/{id}/admin"),
        RouteAccess::Role(UserRole::Admin)
    );
    assert_eq!(
        route_access(&Method::PATCH, "/api/users/{id}/instructor"),
        RouteAccess::Role(UserRole::Admin)
    );
}

#[test]
fn test_class_lifecycle_split_between_roles() {
    // Instructors own creation and edits; admins own moderation.
    assert_eq!(
        route_access(&Method::POST, "/api/classes"),
        RouteAccess::Role(UserRole::Instructor)
    );
    assert_eq!(
        route_access(&Method::PATCH, "/api/classes/{id}"),
        RouteAccess::Role(UserRole::Instructor)
    );
    assert_eq!(
        route_access(&Method::PATCH, "/api/classes/{id}/status"),
        RouteAccess::Role(UserRole::Admin)
    );
    assert_eq!(
        route_access(&Method::PATCH, "/api/classes/{id}/feedback"),
        RouteAccess::Role(UserRole::Admin)
    );
}

#[test]
fn test_payment_routes_all_require_token() {
    assert_eq!(
        route_access(&Method::POST, "/api/payments/intent"),
        RouteAccess::Authenticated
    );
    assert_eq!(
        route_access(&Method::POST, "/api/payments"),
        RouteAccess::Authenticated
    );
    assert_eq!(
        route_access(&Method::GET, "/api/payments"),
        RouteAccess::Authenticated
    );
}

#[tokio::test]
async fn test_require_role_accepts_exact_match() {
    let store = StaticRoleStore::new(&[("admin@test.com", UserRole::Admin)]);

    assert!(
        require_role(&store, "admin@test.com", UserRole::Admin)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_require_role_rejects_other_role() {
    let store = StaticRoleStore::new(&[("student@test.com", UserRole::Student)]);

    let err = require_role(&store, "student@test.com", UserRole::Admin)
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_require_role_has_no_hierarchy() {
    // An admin is not implicitly an instructor.
    let store = StaticRoleStore::new(&[("admin@test.com", UserRole::Admin)]);

    let err = require_role(&store, "admin@test.com", UserRole::Instructor)
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_require_role_rejects_unknown_caller() {
    let store = StaticRoleStore::new(&[]);

    let err = require_role(&store, "ghost@test.com", UserRole::Admin)
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

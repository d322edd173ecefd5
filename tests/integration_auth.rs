mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{mint_token, test_state};
use http_body_util::BodyExt;
use serde_json::json;
use sportscamp::modules::users::model::UserRole;
use sportscamp::router::init_router;
use sportscamp::utils::jwt::verify_token;
use tower::ServiceExt;

// These tests only drive paths that reject or answer before any
// database query runs; the pool in the test state never connects.

fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_issue_token_returns_verifiable_jwt() {
    let app = init_router(test_state(&[]));

    let request = json_request(
        "POST",
        "/api/auth/token",
        None,
        json!({"email": "rider@example.com"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let token = body["token"].as_str().unwrap();

    let claims = verify_token(token, &common::test_jwt_config()).unwrap();
    assert_eq!(claims.email, "rider@example.com");
}

#[tokio::test]
async fn test_issue_token_rejects_invalid_email() {
    let app = init_router(test_state(&[]));

    let request = json_request("POST", "/api/auth/token", None, json!({"email": "nope"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_admin_route_without_token_unauthorized() {
    let app = init_router(test_state(&[]));

    let response = app
        .oneshot(empty_request("GET", "/api/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_garbage_token_unauthorized() {
    let app = init_router(test_state(&[]));

    let response = app
        .oneshot(empty_request("GET", "/api/users", Some("garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_student_token_forbidden() {
    let state = test_state(&[("student@test.com", UserRole::Student)]);
    let app = init_router(state);

    let token = mint_token("student@test.com");
    let response = app
        .oneshot(empty_request("GET", "/api/users", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_with_unknown_user_forbidden() {
    let app = init_router(test_state(&[]));

    let token = mint_token("ghost@test.com");
    let response = app
        .oneshot(empty_request("GET", "/api/users", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_class_requires_instructor_role() {
    let state = test_state(&[("student@test.com", UserRole::Student)]);
    let app = init_router(state);

    let token = mint_token("student@test.com");
    let request = json_request(
        "POST",
        "/api/classes",
        Some(&token),
        json!({
            "name": "Junior Karate",
            "instructor_name": "Kim Lee",
            "available_seats": 10,
            "price": 25.0
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_selections_require_token() {
    let app = init_router(test_state(&[]));

    let response = app
        .oneshot(empty_request("GET", "/api/selections", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_check_for_other_email_is_false_without_lookup() {
    // Asking about someone else's email answers early; the role store is
    // never consulted and no database query runs.
    let app = init_router(test_state(&[]));

    let token = mint_token("me@test.com");
    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/users/admin/other@test.com",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"admin": false}));
}

#[tokio::test]
async fn test_instructor_check_for_other_email_is_false() {
    let app = init_router(test_state(&[]));

    let token = mint_token("me@test.com");
    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/users/instructor/other@test.com",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"instructor": false}));
}

#[tokio::test]
async fn test_payment_intent_converts_price_to_minor_units() {
    let app = init_router(test_state(&[]));

    let token = mint_token("payer@test.com");
    let request = json_request(
        "POST",
        "/api/payments/intent",
        Some(&token),
        json!({"price": 79.99}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // The stub gateway echoes amount and currency into the secret.
    assert_eq!(body["client_secret"], "pi_stub_7999_usd_secret");
}

#[tokio::test]
async fn test_payment_intent_without_token_unauthorized() {
    let app = init_router(test_state(&[]));

    let request = json_request("POST", "/api/payments/intent", None, json!({"price": 10.0}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

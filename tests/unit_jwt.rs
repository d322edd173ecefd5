mod common;

use common::test_jwt_config;
use sportscamp::config::jwt::JwtConfig;
use sportscamp::utils::jwt::{create_access_token, verify_token};

#[test]
fn test_create_access_token_success() {
    let jwt_config = test_jwt_config();

    let result = create_access_token("rider@example.com", &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_round_trip() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("rider@example.com", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.email, "rider@example.com");
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("rider@example.com", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = test_jwt_config();
    let token = create_access_token("rider@example.com", &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, &jwt_config).is_err());
    }
}

#[test]
fn test_token_with_special_characters_in_email() {
    let jwt_config = test_jwt_config();
    let email = "test+special@example.co.uk";

    let token = create_access_token(email, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.email, email);
}

#[test]
fn test_different_users_get_different_tokens() {
    let jwt_config = test_jwt_config();

    let token1 = create_access_token("one@example.com", &jwt_config).unwrap();
    let token2 = create_access_token("two@example.com", &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.email, "one@example.com");
    assert_eq!(claims2.email, "two@example.com");
}

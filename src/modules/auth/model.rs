use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// JWT claims structure. The email is the caller's identity; roles are
// resolved from the role store on every request, never from the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueTokenDto {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

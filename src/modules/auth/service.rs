use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;

use super::model::{IssueTokenDto, TokenResponse};

pub struct AuthService;

impl AuthService {
    /// Issues an access token for the given email payload. There is no
    /// credential check here: identity is established client-side and
    /// the token only fixes which email the caller speaks for. What that
    /// email may do is decided per request by the role store.
    #[instrument(skip(jwt_config))]
    pub fn issue_token(
        dto: IssueTokenDto,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let token = create_access_token(&dto.email, jwt_config)?;
        Ok(TokenResponse { token })
    }
}

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON extractor that runs `validator::Validate` on the deserialized
/// body. Malformed JSON is a 400, a failed validation rule a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(anyhow::anyhow!("{}", rejection.body_text()))
            })?;

        value.validate().map_err(|errors| {
            AppError::unprocessable(anyhow::anyhow!("{}", format_errors(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_format_errors_uses_messages() {
        #[derive(Validate)]
        struct Dto {
            #[validate(email(message = "email must be a valid address"))]
            email: String,
        }

        let errors = Dto {
            email: "not-an-email".to_string(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(format_errors(&errors), "email must be a valid address");
    }

    #[test]
    fn test_format_errors_falls_back_to_field_name() {
        let mut errors = ValidationErrors::new();
        errors.add("price", ValidationError::new("range"));

        assert_eq!(format_errors(&errors), "price is invalid");
    }
}

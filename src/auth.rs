use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::ApiError, Data};

pub const PASSWORD_HEADER: &str = "api-password";

/// Guards a handler behind the `api-password` header.
///
/// A missing or empty header is rejected with 401, anything that differs from the configured
/// password with 403. With no password configured every attempt is a 403.
#[derive(Debug, Clone, Copy)]
pub struct RequirePassword;

impl FromRequestParts<Data> for RequirePassword {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, data: &Data) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(PASSWORD_HEADER)
            .map(|value| value.as_bytes())
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::MissingPassword)?;

        match data.api_password.as_deref() {
            Some(expected) if expected.as_bytes() == provided => Ok(RequirePassword),
            Some(_) => {
                tracing::warn!(path = %parts.uri.path(), "rejected request with a wrong password");
                Err(ApiError::InvalidPassword)
            }
            None => {
                tracing::warn!(path = %parts.uri.path(), "rejected request, API_PASSWORD is not set");
                Err(ApiError::InvalidPassword)
            }
        }
    }
}

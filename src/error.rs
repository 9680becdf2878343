use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::envelope::Envelope;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Quote not found")]
    NotFound,

    #[error("Text is required")]
    TextRequired,

    #[error("{0}")]
    InvalidBody(String),

    #[error("Authentication required. Please provide password in api-password header.")]
    MissingPassword,

    #[error("Invalid password. Access denied.")]
    InvalidPassword,

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// A storage failure while producing a card. Answered in plain text since the
    /// client asked for an image, not JSON.
    #[error("Error generating SVG")]
    Render(#[source] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TextRequired | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingPassword => StatusCode::UNAUTHORIZED,
            ApiError::InvalidPassword => StatusCode::FORBIDDEN,
            ApiError::Database(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if matches!(self, ApiError::Render(_)) {
            return (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response();
        }

        (status, Json(Envelope::error(message))).into_response()
    }
}

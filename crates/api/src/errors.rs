use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(#[from] motdcard_ping::AddressError),

    #[error("Render error: {0}")]
    Render(#[from] motdcard_render::RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidAddress(_) => (StatusCode::BAD_REQUEST, "INVALID_ADDRESS"),
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

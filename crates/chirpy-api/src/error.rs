use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use chirpy_types::api::ErrorResponse;

use crate::validate::ChirpError;

/// Every way a handler can fail, and the status each one maps to.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidChirp(#[from] ChirpError),

    #[error("could not decode request body: {0}")]
    Decode(String),

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("operation not permitted on this platform")]
    Forbidden,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidChirp(_) => StatusCode::BAD_REQUEST,
            ApiError::Decode(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::InvalidChirp(e) => {
                (status, Json(ErrorResponse { error: e.to_string() })).into_response()
            }
            ApiError::NotFound => status.into_response(),
            other => {
                if status.is_server_error() {
                    error!("{}", other);
                } else {
                    warn!("{}", other);
                }
                status.into_response()
            }
        }
    }
}

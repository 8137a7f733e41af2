use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Error codes exposed by the API. Each maps to exactly one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No employee record for the requested id
    NotFound,
    /// An employee record already exists for the given id
    Conflict,
    /// Malformed request, e.g. payload id does not match the path id
    BadRequest,
    /// Unexpected store failure
    InternalError,
}

impl ErrorCode {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl From<shared::Error> for ApiError {
    fn from(err: shared::Error) -> Self {
        let code = match err {
            shared::Error::NotFound(_) => ErrorCode::NotFound,
            shared::Error::Conflict(_) => ErrorCode::Conflict,
            shared::Error::BadRequest(_) => ErrorCode::BadRequest,
            shared::Error::Internal(_) => ErrorCode::InternalError,
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status_code(), Json(self)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{models::Notice, RecordError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    ViolatorNotFound,
    DuplicateId,
    SheetNotConfigured,
    SheetUnavailable,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::MissingField(_) => Self::bad_request(Notice::MISSING_FIELDS.description)
                .with_code(ErrorCode::ValidationFailed),
            _ if err.is_validation() => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::ValidationFailed)
            }
            RecordError::ViolatorNotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::ViolatorNotFound)
            }
            RecordError::DuplicateId(_) => {
                Self::conflict(err.to_string()).with_code(ErrorCode::DuplicateId)
            }
            RecordError::SheetNotConfigured => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, err.to_string())
                    .with_code(ErrorCode::SheetNotConfigured)
            }
            RecordError::SheetUnavailable(_) => Self::new(StatusCode::BAD_GATEWAY, err.to_string())
                .with_code(ErrorCode::SheetUnavailable),
            _ => {
                tracing::error!("Storage error: {}", err);
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text()).with_code(ErrorCode::ValidationFailed)
    }
}

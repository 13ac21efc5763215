//! Response translation
//!
//! Successful RPC results are serialized as JSON with status 200. Failures
//! render through the handle's own error type, so the status policy belongs to
//! the service, not to the adapter. [`RpcStatus`] is a ready-made error type
//! with a conventional gRPC-to-HTTP mapping.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::template::TemplateError;

/// JSON error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

pub(crate) fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    let body = ErrorBody {
        error: ErrorDetails {
            code: code.to_string(),
            message,
        },
    };
    (status, Json(body)).into_response()
}

/// Translate an RPC result into an HTTP response
pub fn respond<T, E>(result: Result<T, E>) -> Response
where
    T: Serialize,
    E: IntoResponse,
{
    match result {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Response for a request that matched no route
pub fn not_found(method: &Method, path: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("no route for {} {}", method, path),
    )
}

/// A route table whose templates do not parse is a server fault
impl IntoResponse for TemplateError {
    fn into_response(self) -> Response {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            format!("invalid route table: {}", self),
        )
    }
}

/// gRPC status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcCode {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl RpcCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcCode::Ok => "OK",
            RpcCode::Cancelled => "CANCELLED",
            RpcCode::Unknown => "UNKNOWN",
            RpcCode::InvalidArgument => "INVALID_ARGUMENT",
            RpcCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            RpcCode::NotFound => "NOT_FOUND",
            RpcCode::AlreadyExists => "ALREADY_EXISTS",
            RpcCode::PermissionDenied => "PERMISSION_DENIED",
            RpcCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            RpcCode::FailedPrecondition => "FAILED_PRECONDITION",
            RpcCode::Aborted => "ABORTED",
            RpcCode::OutOfRange => "OUT_OF_RANGE",
            RpcCode::Unimplemented => "UNIMPLEMENTED",
            RpcCode::Internal => "INTERNAL",
            RpcCode::Unavailable => "UNAVAILABLE",
            RpcCode::DataLoss => "DATA_LOSS",
            RpcCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Conventional HTTP status for this code
    pub fn http_status(&self) -> StatusCode {
        match self {
            RpcCode::Ok => StatusCode::OK,
            RpcCode::InvalidArgument | RpcCode::OutOfRange => StatusCode::BAD_REQUEST,
            RpcCode::NotFound => StatusCode::NOT_FOUND,
            RpcCode::AlreadyExists | RpcCode::Aborted => StatusCode::CONFLICT,
            RpcCode::PermissionDenied => StatusCode::FORBIDDEN,
            RpcCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            RpcCode::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
            RpcCode::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
            RpcCode::Unimplemented => StatusCode::NOT_IMPLEMENTED,
            RpcCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            RpcCode::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            RpcCode::Cancelled => StatusCode::REQUEST_TIMEOUT,
            RpcCode::Unknown | RpcCode::Internal | RpcCode::DataLoss => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RPC failure with a code and message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct RpcStatus {
    pub code: RpcCode,
    pub message: String,
}

impl RpcStatus {
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Render with a caller-supplied status mapping
    pub fn into_response_with<F>(self, map: F) -> Response
    where
        F: FnOnce(RpcCode) -> StatusCode,
    {
        error_response(map(self.code), self.code.as_str(), self.message)
    }
}

impl IntoResponse for RpcStatus {
    fn into_response(self) -> Response {
        self.into_response_with(|code| code.http_status())
    }
}

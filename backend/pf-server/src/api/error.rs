//! REST API error types
//!
//! Every failure leaves the server as `{"error": {code, message, field?, fields?}}`
//! with the matching HTTP status.

use pf_core::{CoreError, FieldErrors, NON_FIELD_ERRORS};
use pf_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable code, e.g. `NOT_FOUND`
    pub code: &'static str,
    pub message: String,
    /// Set when exactly one named field failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Messages per failed field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiErrorBody {
    fn new(code: &'static str, message: String) -> Self {
        Self {
            code,
            message,
            field: None,
            fields: None,
        }
    }

    fn from_field_errors(errors: FieldErrors) -> Self {
        let field = match errors.len() {
            1 => errors
                .fields()
                .next()
                .filter(|name| *name != NON_FIELD_ERRORS)
                .map(str::to_string),
            _ => None,
        };

        Self {
            code: "VALIDATION_ERROR",
            message: errors.to_string(),
            field,
            fields: Some(errors),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400, one or more fields rejected by the serializer
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// 400, body could not be read as JSON
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 500, details stay in the log
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn project_not_found(id: &str) -> Self {
        ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn internal(message: &str) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ApiErrorBody {
        match self {
            ApiError::NotFound { message, .. } => ApiErrorBody::new("NOT_FOUND", message),
            ApiError::Validation { errors, .. } => ApiErrorBody::from_field_errors(errors),
            ApiError::BadRequest { message, .. } => ApiErrorBody::new("BAD_REQUEST", message),
            ApiError::Internal { message, .. } => ApiErrorBody::new("INTERNAL_ERROR", message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = ApiErrorResponse {
            error: self.into_body(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        match e {
            DbError::InvalidRow { .. } => ApiError::internal("Stored data could not be read"),
            DbError::Query { .. } | DbError::Migration { .. } => {
                ApiError::internal("Database operation failed")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { errors, .. } => ApiError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

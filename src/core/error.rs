//! Typed error handling for the rentdesk API
//!
//! Every failure a handler can report is an [`ApiError`]. Each variant maps
//! to an HTTP status code and renders as a JSON body of the form
//! `{"error": "<message>"}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use rentdesk::prelude::*;
//!
//! match service.update_tenant(42, patch).await {
//!     Ok(tenant) => println!("Updated: {:?}", tenant),
//!     Err(ApiError::NotFound { entity, id }) => println!("{} {} is gone", entity, id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result alias used by the service layer and the handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// The error type returned by every rentdesk operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record of the given kind carries this id
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A tenant still lives in the property being deleted
    #[error("Cannot delete property. It is currently occupied.")]
    PropertyOccupied { id: i64 },

    /// The request body or path could not be turned into the expected shape
    #[error("{message}")]
    BadRequest { message: String },

    /// Failure inside the server (poisoned lock and the like)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn tenant_not_found(id: i64) -> Self {
        ApiError::NotFound {
            entity: "Tenant",
            id,
        }
    }

    pub fn property_not_found(id: i64) -> Self {
        ApiError::NotFound {
            entity: "Property",
            id,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PropertyOccupied { .. } => StatusCode::BAD_REQUEST,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Id of the record the request was about, when there is one
    pub fn record_id(&self) -> Option<i64> {
        match self {
            ApiError::NotFound { id, .. } | ApiError::PropertyOccupied { id } => Some(*id),
            ApiError::BadRequest { .. } | ApiError::Internal { .. } => None,
        }
    }

    /// Stable code used in log lines
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::PropertyOccupied { .. } => "PROPERTY_OCCUPIED",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), id = ?self.record_id(), "{}", self);
        } else {
            tracing::warn!(code = self.error_code(), id = ?self.record_id(), "{}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_name_the_entity() {
        assert_eq!(ApiError::tenant_not_found(1).to_string(), "Tenant not found");
        assert_eq!(
            ApiError::property_not_found(1).to_string(),
            "Property not found"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::tenant_not_found(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::PropertyOccupied { id: 1 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::bad_request("nope").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("lock").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_record_id_is_reported_for_id_errors() {
        assert_eq!(ApiError::tenant_not_found(41).record_id(), Some(41));
        assert_eq!(ApiError::PropertyOccupied { id: 9 }.record_id(), Some(9));
        assert_eq!(ApiError::bad_request("x").record_id(), None);
        assert_eq!(ApiError::internal("x").record_id(), None);
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::PropertyOccupied { id: 9 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

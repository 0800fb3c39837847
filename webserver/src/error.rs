//! WebServer-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::{logging::WEBSERVER_SERVICE, service_error, service_warn, AppraisalId, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}")]
    ServerStartupFailed { address: String },

    #[error("Appraisal not found: {id}")]
    AppraisalNotFound { id: AppraisalId },

    #[error("Comparable {index} not found on appraisal {id}")]
    ComparableNotFound { id: AppraisalId, index: usize },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl WebServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest {
            details: details.into(),
        }
    }

    /// HTTP status the error maps to when returned from a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::AppraisalNotFound { .. } | WebServerError::ComparableNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            WebServerError::InvalidRequest { .. }
            | WebServerError::SharedError(SharedError::InvalidUuid { .. })
            | WebServerError::SharedError(SharedError::InvalidStatus { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            service_error!(WEBSERVER_SERVICE, error = %self, "Request failed");
        } else {
            service_warn!(WEBSERVER_SERVICE, status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let id = AppraisalId::new();
        assert_eq!(WebServerError::AppraisalNotFound { id }.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            WebServerError::ComparableNotFound { id, index: 3 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(WebServerError::invalid_request("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebServerError::from(SharedError::InvalidUuid { input: "x".to_string() }).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebServerError::InternalError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_render_json_body() {
        let response = WebServerError::invalid_request("missing field `sale_price`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_error_messages() {
        let id = AppraisalId::new();
        let err = WebServerError::ComparableNotFound { id, index: 2 };
        assert_eq!(err.to_string(), format!("Comparable 2 not found on appraisal {id}"));
    }
}

//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fforge_core::prelude::*;

/// Handler error: renders as `{"success": false, "error": "..."}`
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Validation { .. }
            | Error::ConfigInvalid { .. }
            | Error::InvalidProjectId { .. }
            | Error::Json(_) => StatusCode::BAD_REQUEST,
            Error::ProjectNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Generation { .. } | Error::GeneratorUnavailable { .. } | Error::Http { .. } => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !status.is_server_error() {
            debug!("Request rejected: {}", self.0);
        } else if self.0.is_recoverable() {
            warn!("Request failed ({}): {}", status, self.0);
        } else {
            error!("Request failed ({}): {}", status, self.0);
        }
        let body = Json(json!({
            "success": false,
            "error": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(Error::validation("missing")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::invalid_project_id("../x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::project_not_found("abc")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(Error::generation("quota")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(Error::config_invalid("fforge.toml: expected a table")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::build("flutter exited")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ApiError(Error::validation("Please provide both page name and description"))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! Error responses shared by every HTTP module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::scenario::ScenarioError;

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Maps a scenario error to its HTTP response.
pub fn handle_scenario_error(error: ScenarioError) -> Response {
    match error {
        ScenarioError::NotFound(id) => {
            ErrorResponse::not_found("Scenario", &id.to_string()).into_response_with(StatusCode::NOT_FOUND)
        }
        ScenarioError::ValidationFailed { field, message } => {
            ErrorResponse::bad_request(message)
                .with_details(serde_json::json!({ "field": field }))
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        ScenarioError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Scenario request failed");
            ErrorResponse::internal("Internal server error")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ScenarioId;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
        assert!(error.details.is_none());
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Scenario", "abc-123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("Scenario"));
        assert!(error.message.contains("abc-123"));
    }

    #[test]
    fn scenario_error_not_found_maps_to_404() {
        let response = handle_scenario_error(ScenarioError::NotFound(ScenarioId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn scenario_error_validation_failed_maps_to_400() {
        let response = handle_scenario_error(ScenarioError::validation("name", "blank"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn scenario_error_infrastructure_maps_to_500() {
        let response = handle_scenario_error(ScenarioError::infrastructure("disk full"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

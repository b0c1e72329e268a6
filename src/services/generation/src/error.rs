use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, AppError>;

/// Service-level errors. These are the errors that can cross the HTTP
/// boundary: the generation pipeline itself never surfaces them; its
/// failures are recovered into fallback results (see [`PipelineError`]).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ConfigurationError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let error_response = ErrorResponse {
            error: self.error_code().to_string(),
            message: self.to_string(),
            code: format!("{}", status_code.as_u16()),
            timestamp: chrono::Utc::now(),
        };

        match &self {
            AppError::InternalServerError(_) | AppError::ConfigurationError(_) => {
                tracing::error!("Server error: {:?}", self);
            }
            AppError::ExternalServiceError(_) | AppError::ServiceUnavailable(_) => {
                tracing::warn!("External service error: {:?}", self);
            }
            AppError::BadRequest(_) | AppError::NotFound(_) => {
                tracing::info!("Client error: {:?}", self);
            }
        }

        (status_code, Json(error_response)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON parsing failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::ConnectionRefused | std::io::ErrorKind::ConnectionAborted => {
                AppError::ServiceUnavailable(format!("Connection failed: {}", err))
            }
            _ => AppError::InternalServerError(format!("I/O error: {}", err)),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            AppError::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            AppError::ExternalServiceError(format!("Request failed: {}", err))
        }
    }
}

/// Recoverable failures inside the structured-generation pipeline.
///
/// Every variant is caught at the pipeline boundary and converted into a
/// same-shape fallback result; none of them ever reach a caller as an
/// error. `diagnostic()` is the exact text the fallback synthesizer puts
/// into each contract field, so the dashboard can render it in place of
/// real content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("generation API key is not configured")]
    CredentialMissing,

    #[error("completion request failed: {0}")]
    TransportFailure(String),

    #[error("no JSON object found in model output")]
    NoJsonFound,

    #[error("model output is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("model output is missing required fields: {}", .0.join(", "))]
    IncompleteResponse(Vec<String>),
}

impl PipelineError {
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::CredentialMissing => "CREDENTIAL_MISSING",
            PipelineError::TransportFailure(_) => "TRANSPORT_FAILURE",
            PipelineError::NoJsonFound => "NO_JSON_FOUND",
            PipelineError::MalformedJson(_) => "MALFORMED_JSON",
            PipelineError::IncompleteResponse(_) => "INCOMPLETE_RESPONSE",
        }
    }

    /// Human-readable message rendered in place of generated content.
    pub fn diagnostic(&self) -> String {
        match self {
            PipelineError::CredentialMissing => {
                "API Key Missing: configure GEMINI_API_KEY to enable AI generation.".to_string()
            }
            PipelineError::TransportFailure(detail) => {
                format!("Generation Service Unreachable: {}. Please retry.", detail)
            }
            PipelineError::NoJsonFound => {
                "Invalid Response: the model did not return a JSON object. Please retry."
                    .to_string()
            }
            PipelineError::MalformedJson(detail) => {
                format!("JSON Parse Error: {}. Please retry.", detail)
            }
            PipelineError::IncompleteResponse(fields) => {
                format!("Incomplete Response: missing {}. Please retry.", fields.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::BadRequest("test".to_string()).error_code(),
            "BAD_REQUEST"
        );
        assert_eq!(
            AppError::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AppError::InternalServerError("test".to_string()).error_code(),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ExternalServiceError("test".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert!(AppError::BadRequest("test".to_string()).is_client_error());
        assert!(AppError::ConfigurationError("test".to_string()).is_server_error());
    }

    #[test]
    fn pipeline_error_codes_are_distinct() {
        let errors = [
            PipelineError::CredentialMissing,
            PipelineError::TransportFailure("boom".to_string()),
            PipelineError::NoJsonFound,
            PipelineError::MalformedJson("eof".to_string()),
            PipelineError::IncompleteResponse(vec!["html".to_string()]),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn diagnostics_name_the_failing_stage() {
        assert!(PipelineError::CredentialMissing
            .diagnostic()
            .contains("API Key Missing"));
        assert!(PipelineError::NoJsonFound
            .diagnostic()
            .contains("Invalid Response"));
        assert!(PipelineError::MalformedJson("eof".to_string())
            .diagnostic()
            .contains("JSON Parse Error"));

        let incomplete =
            PipelineError::IncompleteResponse(vec!["subject".to_string(), "content".to_string()]);
        let diagnostic = incomplete.diagnostic();
        assert!(diagnostic.contains("Incomplete Response"));
        assert!(diagnostic.contains("subject, content"));
    }
}

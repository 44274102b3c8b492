use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Failures that end a request in the error envelope
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not allowed by CORS")]
    OriginRejected { origin: String },

    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Invalid JSON body: top-level value must be an object or array")]
    NonCompositeBody,

    #[error("Unable to read request body: {0}")]
    Payload(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::OriginRejected { origin } => {
                tracing::error!(origin = %origin, "Request rejected by origin gate: {}", self)
            }
            other => tracing::error!("Request failed: {:?}", other),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::server_error(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_every_error_renders_the_failure_envelope() {
        let err = ApiError::OriginRejected {
            origin: "https://evil.example".to_string(),
        };
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], crate::models::SERVER_ERROR_MESSAGE);
        assert_eq!(json["message"], "Not allowed by CORS");
    }

    #[test]
    fn test_malformed_body_keeps_parser_detail() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ApiError::from(parse_err);
        assert!(err.to_string().starts_with("Invalid JSON body:"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

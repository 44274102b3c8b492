use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::clock::serialize_iso;
use crate::models::domain::{
    ChatMessage, HeartTemperature, Match, SentMessage, TrustScore, UserDetail, UserSummary,
};

/// Generic error text of the failure envelope
pub const SERVER_ERROR_MESSAGE: &str = "서버 오류가 발생했습니다.";

/// Error text of the not-found envelope
pub const NOT_FOUND_MESSAGE: &str = "요청한 리소스를 찾을 수 없습니다.";

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(serialize_with = "serialize_iso")]
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchesResponse {
    pub success: bool,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: SentMessage,
}

/// Profile update acknowledgement, echoing the submitted profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub message: String,
    pub profile: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrustScoreResponse {
    pub success: bool,
    #[serde(rename = "trustScore")]
    pub trust_score: TrustScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeartTemperatureResponse {
    pub success: bool,
    pub temperature: HeartTemperature,
}

/// Failure envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Envelope for failures raised while processing a request
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: SERVER_ERROR_MESSAGE.to_string(),
            message: Some(message.into()),
        }
    }

    /// Envelope for requests that match no route
    pub fn not_found() -> Self {
        Self {
            success: false,
            error: NOT_FOUND_MESSAGE.to_string(),
            message: None,
        }
    }
}

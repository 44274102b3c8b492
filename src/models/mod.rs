// Model exports
pub mod domain;
pub mod responses;

pub use domain::{
    ChatMessage, HeartTemperature, Match, SentMessage, TemperatureReading, TrustScore, UserDetail,
    UserSummary, Verifications,
};
pub use responses::{
    ErrorResponse, HealthResponse, HeartTemperatureResponse, MatchesResponse, MessagesResponse,
    ProfileResponse, SendMessageResponse, TrustScoreResponse, UserResponse, UsersResponse,
    NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE,
};

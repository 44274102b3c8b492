use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::clock::serialize_iso;

/// User as shown in the user list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub age: u8,
    pub gender: String,
}

/// User detail view
///
/// `id` is `None` (serialized as `null`) when the requested id is not a number.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    pub id: Option<i64>,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub bio: String,
    pub hobbies: Vec<String>,
}

/// Match between the current user and another user
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "matchDate", serialize_with = "serialize_iso")]
    pub match_date: DateTime<Utc>,
    #[serde(rename = "intimacyScore")]
    pub intimacy_score: u32,
}

/// Message in a chat history
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: i64,
    #[serde(rename = "senderId")]
    pub sender_id: i64,
    pub message: String,
    #[serde(serialize_with = "serialize_iso")]
    pub timestamp: DateTime<Utc>,
}

/// Message accepted from the client
///
/// The text is whatever JSON value the client sent under `message`; when the
/// field was missing it is left out of the response entirely.
#[derive(Debug, Clone, Serialize)]
pub struct SentMessage {
    pub id: i64,
    #[serde(rename = "senderId")]
    pub sender_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
    #[serde(serialize_with = "serialize_iso")]
    pub timestamp: DateTime<Utc>,
}

/// Trust score ("진심지수") summary
#[derive(Debug, Clone, Serialize)]
pub struct TrustScore {
    pub score: f64,
    pub level: String,
    #[serde(rename = "dailyQuestCompleted")]
    pub daily_quest_completed: bool,
    pub verifications: Verifications,
}

/// Completed identity verifications
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verifications {
    pub phone: bool,
    pub video: bool,
    #[serde(rename = "criminalRecord")]
    pub criminal_record: bool,
    pub job: bool,
}

/// Heart temperature with its daily history
#[derive(Debug, Clone, Serialize)]
pub struct HeartTemperature {
    pub current: f64,
    pub level: String,
    pub history: Vec<TemperatureReading>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureReading {
    pub date: String,
    pub temperature: f64,
}

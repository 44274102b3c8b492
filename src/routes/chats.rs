use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::core::epoch_millis;
use crate::error::ApiError;
use crate::models::{ChatMessage, MessagesResponse, SendMessageResponse, SentMessage};
use crate::routes::body::json_body;

/// Sender id used for everything the client posts
pub const CURRENT_USER_ID: i64 = 1;

/// GET /api/chats/{matchId}/messages
pub async fn list_messages(_match_id: web::Path<String>) -> HttpResponse {
    let now = Utc::now();

    HttpResponse::Ok().json(MessagesResponse {
        success: true,
        messages: vec![
            ChatMessage {
                id: 1,
                sender_id: 1,
                message: "안녕하세요!".to_string(),
                timestamp: now,
            },
            ChatMessage {
                id: 2,
                sender_id: 2,
                message: "반가워요!".to_string(),
                timestamp: now,
            },
        ],
    })
}

/// POST /api/chats/{matchId}/messages
///
/// Request body:
/// ```json
/// { "message": "string" }
/// ```
///
/// The id comes from the millisecond clock, so two messages posted within the
/// same millisecond share an id.
pub async fn send_message(
    req: HttpRequest,
    _match_id: web::Path<String>,
    payload: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let body = json_body(&req, payload)?;
    let now = Utc::now();

    Ok(HttpResponse::Ok().json(SendMessageResponse {
        success: true,
        message: SentMessage {
            id: epoch_millis(&now),
            sender_id: CURRENT_USER_ID,
            message: body.get("message").cloned(),
            timestamp: now,
        },
    }))
}

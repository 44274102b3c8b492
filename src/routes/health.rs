use actix_web::{HttpResponse, Responder};
use chrono::Utc;

use crate::models::HealthResponse;

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        message: "백엔드 서버가 정상 작동 중입니다.".to_string(),
    })
}

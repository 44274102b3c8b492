use actix_web::{HttpResponse, Responder};
use chrono::Utc;

use crate::models::{Match, MatchesResponse};

/// GET /api/matches
pub async fn list_matches() -> impl Responder {
    HttpResponse::Ok().json(MatchesResponse {
        success: true,
        matches: vec![Match {
            id: 1,
            user_id: 2,
            user_name: "김영희".to_string(),
            match_date: Utc::now(),
            intimacy_score: 500,
        }],
    })
}

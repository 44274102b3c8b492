use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::ApiError;
use crate::models::ProfileResponse;
use crate::routes::body::json_body;

/// PUT /api/profile
///
/// Echoes the submitted profile; nothing is stored.
pub async fn update_profile(
    req: HttpRequest,
    payload: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let profile = json_body(&req, payload)?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        success: true,
        message: "프로필이 업데이트되었습니다.".to_string(),
        profile,
    }))
}

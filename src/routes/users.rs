use actix_web::{web, HttpResponse, Responder};

use crate::core::parse_int_prefix;
use crate::models::{UserDetail, UserResponse, UserSummary, UsersResponse};

fn summary(id: i64, name: &str, age: u8, gender: &str) -> UserSummary {
    UserSummary {
        id,
        name: name.to_string(),
        age,
        gender: gender.to_string(),
    }
}

/// GET /api/users
pub async fn list_users() -> impl Responder {
    HttpResponse::Ok().json(UsersResponse {
        success: true,
        users: vec![
            summary(1, "홍길동", 25, "남성"),
            summary(2, "김영희", 23, "여성"),
        ],
    })
}

/// GET /api/users/{id}
///
/// Only `id` reflects the request; the rest of the profile is always the same.
pub async fn get_user(path: web::Path<String>) -> impl Responder {
    let id = parse_int_prefix(&path.into_inner());

    HttpResponse::Ok().json(UserResponse {
        success: true,
        user: UserDetail {
            id,
            name: "홍길동".to_string(),
            age: 25,
            gender: "남성".to_string(),
            bio: "안녕하세요!".to_string(),
            hobbies: ["운동", "영화", "독서"].iter().map(|h| h.to_string()).collect(),
        },
    })
}

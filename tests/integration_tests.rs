// Integration tests for the Dating Mock API

use actix_web::{
    http::{header, Method, StatusCode},
    test,
};
use chrono::{DateTime, Utc};
use dating_mock_api::{build_app, models::NOT_FOUND_MESSAGE, models::SERVER_ERROR_MESSAGE};
use dating_mock_api::{routes::RouteMethod, OriginGate, ROUTE_TABLE};
use serde_json::{json, Value};

const APP_ORIGIN: &str = "http://localhost:3012";

fn test_gate() -> OriginGate {
    OriginGate::new(
        vec![APP_ORIGIN.to_string(), "https://app.example.com".to_string()],
        true,
    )
}

macro_rules! app {
    () => {
        test::init_service(build_app(test_gate())).await
    };
}

#[actix_web::test]
async fn test_health_reports_ok_with_current_timestamp() {
    let app = app!();
    let before = Utc::now() - chrono::Duration::seconds(1);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "백엔드 서버가 정상 작동 중입니다.");

    let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
    assert!(timestamp.with_timezone(&Utc) >= before);
}

#[actix_web::test]
async fn test_user_list_has_two_fixed_users() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["success"], true);
    assert_eq!(
        body["users"],
        json!([
            { "id": 1, "name": "홍길동", "age": 25, "gender": "남성" },
            { "id": 2, "name": "김영희", "age": 23, "gender": "여성" }
        ])
    );
}

#[actix_web::test]
async fn test_user_detail_echoes_only_the_id() {
    let app = app!();

    for (raw, expected) in [("7", json!(7)), ("42", json!(42)), ("12abc", json!(12))] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri(&format!("/api/users/{}", raw)).to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["id"], expected);
        assert_eq!(body["user"]["name"], "홍길동");
        assert_eq!(body["user"]["age"], 25);
        assert_eq!(body["user"]["bio"], "안녕하세요!");
        assert_eq!(body["user"]["hobbies"], json!(["운동", "영화", "독서"]));
    }
}

#[actix_web::test]
async fn test_user_detail_with_non_numeric_id_is_not_rejected() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users/abc").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["user"]["id"].is_null());
    assert_eq!(body["user"]["name"], "홍길동");
}

#[actix_web::test]
async fn test_matches_use_request_time() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/matches").to_request()).await;
    let body: Value = test::read_body_json(resp).await;

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["userId"], 2);
    assert_eq!(matches[0]["userName"], "김영희");
    assert_eq!(matches[0]["intimacyScore"], 500);
    assert!(DateTime::parse_from_rfc3339(matches[0]["matchDate"].as_str().unwrap()).is_ok());
}

#[actix_web::test]
async fn test_chat_history_ignores_match_id() {
    let app = app!();

    for match_id in ["1", "999", "not-a-number"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/chats/{}/messages", match_id))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["senderId"], 1);
        assert_eq!(messages[0]["message"], "안녕하세요!");
        assert_eq!(messages[1]["senderId"], 2);
        assert_eq!(messages[1]["message"], "반가워요!");
    }
}

#[actix_web::test]
async fn test_send_message_echoes_text() {
    let app = app!();
    let before = Utc::now().timestamp_millis();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/chats/3/messages")
            .set_json(json!({ "message": "hi" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let after = Utc::now().timestamp_millis();
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"]["message"], "hi");
    assert_eq!(body["message"]["senderId"], 1);

    let id = body["message"]["id"].as_i64().unwrap();
    assert!(id >= before && id <= after, "id {} not within [{}, {}]", id, before, after);
}

#[actix_web::test]
async fn test_send_message_passes_through_non_string_and_missing_text() {
    let app = app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/chats/3/messages")
            .set_json(json!({ "message": { "sticker": 5 } }))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"]["message"], json!({ "sticker": 5 }));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/chats/3/messages")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_object().unwrap().get("message").is_none());
}

#[actix_web::test]
async fn test_profile_update_echoes_payload() {
    let app = app!();
    let profile = json!({ "foo": "bar", "nested": { "tags": [1, 2, 3] } });

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/profile")
            .set_json(&profile)
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "프로필이 업데이트되었습니다.");
    assert_eq!(body["profile"], profile);
    assert_eq!(body["profile"]["foo"], "bar");
}

#[actix_web::test]
async fn test_profile_update_keeps_key_order() {
    let app = app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/profile")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"zeta":1,"alpha":{"y":true,"b":null},"mid":[3,2,1]}"#)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let raw = test::read_body(resp).await;
    let text = std::str::from_utf8(&raw).unwrap();
    assert!(
        text.contains(r#""profile":{"zeta":1,"alpha":{"y":true,"b":null},"mid":[3,2,1]}"#),
        "profile not echoed in client order: {}",
        text
    );
}

#[actix_web::test]
async fn test_profile_update_echoes_out_of_range_numbers_as_null() {
    let app = app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/profile")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"x":1e400,"y":-1e400,"z":12}"#)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["profile"]["x"].is_null());
    assert!(body["profile"]["y"].is_null());
    assert_eq!(body["profile"]["z"], 12);
}

#[actix_web::test]
async fn test_head_is_answered_on_get_routes() {
    let app = app!();

    for route in ROUTE_TABLE.iter().filter(|route| route.method == RouteMethod::Get) {
        let path = route.path.replace(":id", "7").replace(":matchId", "3");
        let resp = test::call_service(
            &app,
            test::TestRequest::default()
                .method(Method::HEAD)
                .uri(&path)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK, "HEAD {}", route.path);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::default()
            .method(Method::HEAD)
            .uri("/api/profile")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_trust_score_and_heart_temperature() {
    let app = app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/trust-score").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["trustScore"]["score"], 65.5);
    assert_eq!(body["trustScore"]["level"], "믿음직한");
    assert_eq!(body["trustScore"]["dailyQuestCompleted"], true);
    assert_eq!(
        body["trustScore"]["verifications"],
        json!({ "phone": true, "video": false, "criminalRecord": false, "job": true })
    );

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/heart-temperature").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["temperature"]["current"], 36.5);
    assert_eq!(body["temperature"]["level"], "따뜻함");
    let history = body["temperature"]["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["date"], "2025-01-01");
    assert_eq!(history[2]["temperature"], 36.5);
}

#[actix_web::test]
async fn test_every_table_route_is_served() {
    let app = app!();

    for route in ROUTE_TABLE {
        let path = route.path.replace(":id", "7").replace(":matchId", "3");
        let req = match route.method {
            RouteMethod::Get => test::TestRequest::get().uri(&path),
            RouteMethod::Post => test::TestRequest::post().uri(&path).set_json(json!({ "message": "x" })),
            RouteMethod::Put => test::TestRequest::put().uri(&path).set_json(json!({})),
        };

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{} {}", route.method, route.path);
    }
}

#[actix_web::test]
async fn test_unknown_path_gets_not_found_envelope() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nonexistent").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "error": NOT_FOUND_MESSAGE }));
}

#[actix_web::test]
async fn test_wrong_method_gets_not_found_envelope() {
    let app = app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::default()
            .method(Method::DELETE)
            .uri("/api/profile")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_trailing_slash_is_tolerated() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_malformed_json_gets_error_envelope() {
    let app = app!();

    for (method, uri) in [(Method::POST, "/api/chats/1/messages"), (Method::PUT, "/api/profile")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::default()
                .method(method)
                .uri(uri)
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{\"message\": ")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], SERVER_ERROR_MESSAGE);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON body"));
    }
}

#[actix_web::test]
async fn test_oversized_body_gets_error_envelope() {
    let app = app!();
    let big = format!("{{\"foo\":\"{}\"}}", "x".repeat(dating_mock_api::BODY_LIMIT_BYTES));

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/profile")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(big)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_allowed_origin_gets_cors_headers() {
    let app = app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users")
            .insert_header((header::ORIGIN, APP_ORIGIN))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), APP_ORIGIN);
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[actix_web::test]
async fn test_request_without_origin_passes_gate() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/matches").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[actix_web::test]
async fn test_unknown_origin_is_rejected_before_routing() {
    let app = app!();

    for uri in ["/api/users", "/api/nonexistent"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(uri)
                .insert_header((header::ORIGIN, "https://evil.example"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": SERVER_ERROR_MESSAGE,
                "message": "Not allowed by CORS"
            })
        );
    }
}

#[actix_web::test]
async fn test_preflight_from_allowed_origin() {
    let app = app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/profile")
            .insert_header((header::ORIGIN, APP_ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        APP_ORIGIN
    );
}

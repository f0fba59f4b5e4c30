// tests/affirmation_api.rs

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use affirm_backend::api::create_router;
use affirm_backend::config::AffirmConfig;
use affirm_backend::phrases;
use affirm_backend::state::AppState;

/// Build an app with an explicit config so tests never depend on the
/// environment. `groq_base_url` points at a closed port, so any remote
/// attempt fails immediately instead of hitting the network.
fn test_app(api_key: Option<&str>) -> Router {
    let config = AffirmConfig {
        groq_api_key: api_key.map(String::from),
        groq_base_url: "http://127.0.0.1:9".to_string(),
        model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.8,
        max_tokens: 150,
        http_timeout: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "info".to_string(),
    };
    let state = AppState::new(config).expect("failed to build app state");
    create_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_reports_ai_disabled() {
    let app = test_app(None);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai_enabled"], false);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_check_reports_ai_enabled_with_credential() {
    let app = test_app(Some("gsk_test"));

    let response = app.oneshot(get("/")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["ai_enabled"], true);
}

#[tokio::test]
async fn missing_mood_is_rejected() {
    let app = test_app(None);

    let response = app
        .clone()
        .oneshot(post_json("/api/generate-affirmation", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Mood is required");

    // Whitespace-only mood trims to empty
    let response = app
        .clone()
        .oneshot(post_json("/api/generate-affirmation", json!({"mood": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Rejected requests must not append to the store
    let response = app.oneshot(get("/api/affirmations")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn unparseable_body_is_rejected() {
    let app = test_app(None);

    let request = Request::builder()
        .method("POST")
        .uri("/api/generate-affirmation")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn local_generation_appends_notice_and_stores_record() {
    let app = test_app(None);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/generate-affirmation",
            json!({"mood": "anxious"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["mood"], "anxious");
    assert_eq!(body["id"], 1);
    assert_eq!(body["ai_generated"], false);

    let affirmation = body["affirmation"].as_str().unwrap();
    assert!(affirmation.starts_with(&phrases::compose("anxious", "")));
    assert!(affirmation.ends_with("[Add GROQ_API_KEY to .env for AI-powered affirmations]"));

    let response = app.oneshot(get("/api/affirmations")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["affirmations"][0]["mood"], "anxious");
}

#[tokio::test]
async fn situation_clause_is_appended() {
    let app = test_app(None);

    let response = app
        .oneshot(post_json(
            "/api/generate-affirmation",
            json!({"mood": "stressed", "situation": "moving to a new city"}),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    let affirmation = body["affirmation"].as_str().unwrap();
    assert!(affirmation.contains("Moving to a new city is an opportunity for growth."));
}

#[tokio::test]
async fn unknown_mood_uses_default_phrase() {
    let app = test_app(None);

    let response = app
        .oneshot(post_json(
            "/api/generate-affirmation",
            json!({"mood": "melancholy"}),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    let affirmation = body["affirmation"].as_str().unwrap();
    assert!(affirmation.starts_with("I am enough. I am worthy. I am capable."));
}

#[tokio::test]
async fn ids_are_sequential_across_requests() {
    let app = test_app(None);
    let moods = ["anxious", "sad", "excited", "grateful"];

    for (i, mood) in moods.iter().enumerate() {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/generate-affirmation",
                json!({"mood": mood}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["id"], i as u64 + 1);
    }

    let response = app.oneshot(get("/api/affirmations")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["count"], 4);

    let records = body["affirmations"].as_array().unwrap();
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["id"], i as u64 + 1);
        assert_eq!(record["mood"], moods[i]);
    }
}

#[tokio::test]
async fn remote_failure_falls_back_to_local_composer() {
    // Credential configured, but the endpoint is unreachable: the response
    // must match the local composer output (no notice suffix, no error),
    // while ai_generated still reflects credential presence.
    let app = test_app(Some("gsk_test"));

    let response = app
        .oneshot(post_json(
            "/api/generate-affirmation",
            json!({"mood": "anxious", "situation": "final exams"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["affirmation"],
        phrases::compose("anxious", "final exams")
    );
    assert_eq!(body["ai_generated"], true);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_app(None);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/generate-affirmation")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

//! End-to-end tests of the HTTP API against an in-memory database.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use intervue_db::Database;
use intervue_interview::{QuestionGenerator, FALLBACK_NOTICE};
use intervue_llm::LlmBackend;
use intervue_security::TokenService;
use intervue_test_utils::{sample_interview_data, sample_questions_reply, ScriptedBackend};
use intervue_web::{build_router, AppState};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

const PASSWORD: &str = "Corr3ct-Horse";

async fn app(backend: Option<ScriptedBackend>) -> Router {
    let db = Database::connect("sqlite::memory:", 1).await.unwrap();
    db.initialize().await.unwrap();
    let tokens = TokenService::new(&SecretString::from("test-secret".to_string()), chrono::Duration::hours(1));
    let generator = QuestionGenerator::new(backend.map(|b| Arc::new(b) as Arc<dyn LlmBackend>));
    build_router(AppState::new(db, tokens, generator))
}

async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": "Test User", "email": email, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["token"].as_str().unwrap().to_string()
}

// ── System ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_and_health() {
    let app = app(None).await;

    let (status, body) = send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("AI Interview Assistant API is running"));

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": true, "aiConfigured": false }));
}

// ── Accounts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_login_and_me() {
    let app = app(None).await;
    let token = register(&app, "Ada@Example.com").await;

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["name"], "Test User");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"]["createdAt"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = app(None).await;
    register(&app, "grace@example.com").await;

    for (email, password) in [("grace@example.com", "Wrong-Pass1"), ("nobody@example.com", PASSWORD)] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Invalid credentials" }));
    }
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = app(None).await;
    register(&app, "dup@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": "Again", "email": "DUP@example.com", "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User already exists" }));
}

#[tokio::test]
async fn test_invalid_registrations() {
    let app = app(None).await;
    let cases = [
        json!({ "name": "", "email": "a@example.com", "password": PASSWORD }),
        json!({ "name": "A", "email": "not-an-email", "password": PASSWORD }),
        json!({ "name": "A", "email": "a@example.com", "password": "weak" }),
        json!({ "name": "A", "email": "a@example.com", "password": "alllowercase1!" }),
    ];
    for case in cases {
        let (status, body) = send(&app, "POST", "/api/auth/register", None, Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_weak_password_lists_broken_rules() {
    let app = app(None).await;
    let body = json!({ "name": "A", "email": "a@example.com", "password": "alllowercase1!" });
    let (status, body) = send(&app, "POST", "/api/auth/register", None, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Password does not meet requirements: an uppercase letter" }));
}

#[tokio::test]
async fn test_protected_routes_require_bearer_token() {
    let app = app(None).await;
    let routes = [
        ("GET", "/api/auth/me"),
        ("POST", "/api/ai/questions"),
        ("GET", "/api/interviews/current"),
        ("PUT", "/api/interviews/current"),
        ("DELETE", "/api/interviews/current"),
        ("POST", "/api/interviews/complete"),
        ("GET", "/api/interviews"),
        ("GET", "/api/interviews/some-id"),
        ("DELETE", "/api/interviews/some-id"),
        ("GET", "/api/dashboard/stats"),
    ];

    for (method, uri) in routes {
        let (status, body) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body, json!({ "error": "Authentication required" }));

        let (status, body) = send(&app, method, uri, Some("not-a-jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body, json!({ "error": "Invalid token" }));
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let app = app(None).await;
    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ── Questions ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_ai_questions() {
    let backend = ScriptedBackend::new().reply(&sample_questions_reply());
    let app = app(Some(backend.clone())).await;
    let token = register(&app, "q@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/ai/questions",
        Some(&token),
        Some(json!({ "jobPosition": "Backend Developer", "experienceLevel": "Senior Level", "count": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["questions"][0]["category"], "technical");
    assert!(body.get("notice").is_none());

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].messages[1].content.contains("Senior Level Backend Developer"));
}

#[tokio::test]
async fn test_failing_ai_falls_back_to_category_bank() {
    let app = app(Some(ScriptedBackend::new().fail("503 from upstream"))).await;
    let token = register(&app, "f@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/ai/questions",
        Some(&token),
        Some(json!({ "jobPosition": "Analytics Engineer", "count": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"], FALLBACK_NOTICE);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(3));
    assert_eq!(
        body["questions"][0],
        json!({ "question": "Explain the difference between supervised and unsupervised learning.", "category": "general" })
    );
}

#[tokio::test]
async fn test_questions_require_job_position() {
    let app = app(None).await;
    let token = register(&app, "p@example.com").await;

    let (status, body) = send(&app, "POST", "/api/ai/questions", Some(&token), Some(json!({ "count": 3 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Job position is required" }));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app(None).await;
    let token = register(&app, "m@example.com").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/ai/questions")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"jobPosition\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

// ── Interviews ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_current_interview_lifecycle() {
    let app = app(None).await;
    let token = register(&app, "c@example.com").await;

    let (status, body) = send(&app, "GET", "/api/interviews/current", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let draft = json!({ "jobPosition": "Product Manager", "answers": ["First answer"] });
    let (status, _) = send(&app, "PUT", "/api/interviews/current", Some(&token), Some(draft.clone())).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/api/interviews/current", Some(&token), None).await;
    assert_eq!(body, draft);

    let (status, _) = send(&app, "DELETE", "/api/interviews/current", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(&app, "GET", "/api/interviews/current", Some(&token), None).await;
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_complete_interview_moves_it_to_history() {
    let app = app(None).await;
    let token = register(&app, "h@example.com").await;

    send(&app, "PUT", "/api/interviews/current", Some(&token), Some(json!({ "jobPosition": "Software Engineer" }))).await;

    let data = serde_json::to_value(sample_interview_data()).unwrap();
    let (status, summary) = send(&app, "POST", "/api/interviews/complete", Some(&token), Some(data)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(summary["totalQuestions"], 3);
    assert_eq!(summary["answeredQuestions"], 2);
    assert_eq!(summary["duration"], "6:42");

    let scores: Vec<u64> = summary["questionScores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["score"].as_u64().unwrap())
        .collect();
    assert_eq!(scores.len(), 3);
    assert!(scores.iter().all(|s| (70..=99).contains(s)));
    assert_eq!(summary["overallScore"].as_u64().unwrap(), scores.iter().sum::<u64>() / 3);

    let (_, current) = send(&app, "GET", "/api/interviews/current", Some(&token), None).await;
    assert_eq!(current, Value::Null);

    let (status, history) = send(&app, "GET", "/api/interviews", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, json!([summary.clone()]));

    let id = summary["id"].as_str().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/interviews/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, summary);
}

#[tokio::test]
async fn test_complete_rejects_empty_interview() {
    let app = app(None).await;
    let token = register(&app, "e@example.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/interviews/complete",
        Some(&token),
        Some(json!({ "jobPosition": "Sales", "questions": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_interview_then_404() {
    let app = app(None).await;
    let token = register(&app, "d@example.com").await;

    let data = serde_json::to_value(sample_interview_data()).unwrap();
    let (_, summary) = send(&app, "POST", "/api/interviews/complete", Some(&token), Some(data)).await;
    let uri = format!("/api/interviews/{}", summary["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Interview not found" }));

    let (status, _) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_token_for_unknown_user_is_not_found() {
    let app = app(None).await;
    let tokens = TokenService::new(&SecretString::from("test-secret".to_string()), chrono::Duration::hours(1));
    let token = tokens.issue(&uuid::Uuid::new_v4().to_string()).unwrap();

    let (status, body) = send(&app, "PUT", "/api/interviews/current", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));

    let (status, _) = send(&app, "POST", "/api/interviews/complete", Some(&token), Some(serde_json::to_value(sample_interview_data()).unwrap())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_users_never_see_each_other() {
    let app = app(None).await;
    let alice = register(&app, "alice@example.com").await;
    let bob = register(&app, "bob@example.com").await;

    let data = serde_json::to_value(sample_interview_data()).unwrap();
    let (_, summary) = send(&app, "POST", "/api/interviews/complete", Some(&alice), Some(data)).await;
    let uri = format!("/api/interviews/{}", summary["id"].as_str().unwrap());

    let (_, history) = send(&app, "GET", "/api/interviews", Some(&bob), None).await;
    assert_eq!(history, json!([]));
    let (status, _) = send(&app, "GET", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, history) = send(&app, "GET", "/api/interviews", Some(&alice), None).await;
    assert_eq!(history.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_history_search_and_sort() {
    let app = app(None).await;
    let token = register(&app, "s@example.com").await;

    for position in ["Software Engineer", "Data Scientist", "Senior Software Engineer"] {
        let mut data = sample_interview_data();
        data.job_position = position.to_string();
        let (status, _) = send(
            &app,
            "POST",
            "/api/interviews/complete",
            Some(&token),
            Some(serde_json::to_value(data).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, found) = send(&app, "GET", "/api/interviews?search=software", Some(&token), None).await;
    let positions: Vec<&str> = found.as_array().unwrap().iter().map(|e| e["jobPosition"].as_str().unwrap()).collect();
    assert_eq!(positions, vec!["Senior Software Engineer", "Software Engineer"]);

    let (_, by_score) = send(&app, "GET", "/api/interviews?sort=score", Some(&token), None).await;
    let scores: Vec<u64> = by_score.as_array().unwrap().iter().map(|e| e["overallScore"].as_u64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    let (status, _) = send(&app, "GET", "/api/interviews?sort=alphabetical", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = app(None).await;
    let token = register(&app, "stats@example.com").await;

    let (status, empty) = send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["totalInterviews"], 0);
    assert_eq!(empty["latestScore"], Value::Null);

    let data = serde_json::to_value(sample_interview_data()).unwrap();
    let (_, summary) = send(&app, "POST", "/api/interviews/complete", Some(&token), Some(data)).await;

    let (_, stats) = send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;
    assert_eq!(stats["totalInterviews"], 1);
    assert_eq!(stats["averageScore"], summary["overallScore"]);
    assert_eq!(stats["bestScore"], summary["overallScore"]);
    assert_eq!(stats["latestScore"], summary["overallScore"]);
    assert_eq!(stats["positions"][0]["jobPosition"], "Software Engineer");
    assert_eq!(stats["scoreTrend"].as_array().map(Vec::len), Some(1));
}

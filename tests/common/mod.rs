//! Test harness: the full router over in-memory adapters.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

use neurolink::adapters::ai::MockAIProvider;
use neurolink::adapters::auth::JwtAuthenticator;
use neurolink::adapters::http::{api_router, AppState};
use neurolink::adapters::memory::{
    InMemoryCourseRepository, InMemoryDecisionRepository, InMemoryEmotionRepository,
    InMemoryUserRepository,
};
use neurolink::adapters::password::Argon2Hasher;

pub fn app_with_ai(ai: MockAIProvider) -> Router {
    let jwt = Arc::new(JwtAuthenticator::new(
        Secret::new("integration-test-signing-secret-0123456789".to_string()),
        3600,
    ));

    let state = AppState {
        users: Arc::new(InMemoryUserRepository::new()),
        courses: Arc::new(InMemoryCourseRepository::new()),
        emotions: Arc::new(InMemoryEmotionRepository::new()),
        decisions: Arc::new(InMemoryDecisionRepository::new()),
        ai: Arc::new(ai),
        hasher: Arc::new(Argon2Hasher::new(8, 1, 1).expect("argon2 params")),
        tokens: jwt.clone(),
        sessions: jwt,
        ai_timeout: Duration::from_secs(2),
    };

    api_router(state)
}

pub fn app() -> Router {
    app_with_ai(MockAIProvider::new())
}

/// Sends one request and returns the status and the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

/// Registers a user and returns a bearer token for them.
pub async fn signup(app: &Router, name: &str, email: &str) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "name": name, "email": email, "password": "s3cret-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "s3cret-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token").to_string()
}

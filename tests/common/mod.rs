//! Shared harness: a migrated, seeded, file-backed SQLite store per test and the full router.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use lang_portal::store::connect;
use lang_portal::{app, apply_migrations, seed_if_empty, AppConfig, AppState, Store};
use serde_json::Value;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Store,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("portal.db").display());
    let pool = connect(&url, 5).await.expect("open pool");
    apply_migrations(&pool).await.expect("migrate");
    seed_if_empty(&pool).await.expect("seed");
    let store = Store::new(pool, Duration::from_secs(10), 1);
    let router = app(AppState::new(store.clone()), &AppConfig::default()).expect("router");
    TestApp {
        router,
        store,
        _dir: dir,
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(&self.router, req).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(&self.router, req).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        send(&self.router, req).await
    }

    /// POST /study_sessions and return the new session's id.
    pub async fn start_session(&self, group_id: i64, activity_id: i64) -> i64 {
        let (status, body) = self
            .post_json(
                "/study_sessions",
                &format!(r#"{{"group_id":{},"study_activity_id":{}}}"#, group_id, activity_id),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().expect("session id")
    }

    pub async fn review(&self, session_id: i64, word_id: i64, correct: bool) -> (StatusCode, Value) {
        self.post_json(
            &format!("/study_sessions/{}/review", session_id),
            &format!(r#"{{"word_id":{},"correct":{}}}"#, word_id, correct),
        )
        .await
    }
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or("")
}

pub fn ids(body: &Value) -> Vec<i64> {
    let items = body.get("data").unwrap_or(body);
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v["id"].as_i64().expect("id"))
        .collect()
}

mod common;

use axum::http::StatusCode;
use common::{error_code, ids, spawn_app};
use lang_portal::{AppError, StudyActivityRepository, StudySessionRepository};
use std::collections::HashSet;

#[tokio::test]
async fn create_returns_canonical_row() {
    let app = spawn_app().await;
    let (status, body) = app
        .post_json("/study_sessions", r#"{"group_id":1,"study_activity_id":2}"#)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["group_id"], 1);
    assert_eq!(body["study_activity_id"], 2);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn create_with_missing_references_is_a_conflict() {
    let app = spawn_app().await;
    for payload in [
        r#"{"group_id":999,"study_activity_id":1}"#,
        r#"{"group_id":1,"study_activity_id":999}"#,
    ] {
        let (status, body) = app.post_json("/study_sessions", payload).await;
        assert_eq!(status, StatusCode::CONFLICT, "{payload}");
        assert_eq!(error_code(&body), "constraint_violation");
    }
    let (_, body) = app.get("/study_sessions").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = spawn_app().await;
    for payload in [
        "{not json",
        r#"{"group_id":1}"#,
        r#"{"group_id":"one","study_activity_id":1}"#,
        r#"{"group_id":0,"study_activity_id":1}"#,
    ] {
        let (status, body) = app.post_json("/study_sessions", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(error_code(&body), "invalid_parameter");
    }
    let (status, _) = app
        .post_raw("/study_sessions", r#"{"group_id":1,"study_activity_id":1}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn log_review_round_trip() {
    let app = spawn_app().await;
    let session = app.start_session(1, 1).await;
    let (status, body) = app.review(session, 4, true).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["word_id"], 4);
    assert_eq!(body["study_session_id"], session);
    assert_eq!(body["correct"], true);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn review_for_missing_session_or_word_is_rejected() {
    let app = spawn_app().await;
    let (status, body) = app.review(9999, 1, true).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "constraint_violation");

    let session = app.start_session(1, 1).await;
    let (status, _) = app.review(session, 9999, false).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post_json("/study_sessions/abc/review", r#"{"word_id":1,"correct":true}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_json(&format!("/study_sessions/{}/review", session), r#"{"word_id":1}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_rejects_review_for_missing_session() {
    let app = spawn_app().await;
    let err = app.store.log_review(9999, 1, true).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "{err:?}");
}

#[tokio::test]
async fn summaries_are_newest_first_with_review_counts() {
    let app = spawn_app().await;
    let a = app.start_session(1, 1).await;
    let b = app.start_session(2, 2).await;
    let c = app.start_session(3, 3).await;
    app.review(b, 5, true).await;
    app.review(b, 6, false).await;

    let (status, body) = app.get("/study_sessions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["pages"], 1);
    assert_eq!(ids(&body), vec![c, b, a]);

    let (status, summary) = app.get(&format!("/study_sessions/{}", b)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["group_name"], "Household Items");
    assert_eq!(summary["activity_name"], "Quizzes");
    assert_eq!(summary["review_items_count"], 2);

    let (status, _) = app.get("/study_sessions/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reviewed_words_tally_outcomes() {
    let app = spawn_app().await;
    let session = app.start_session(1, 1).await;
    for (word, correct) in [(2, false), (1, true), (1, true), (1, false)] {
        let (status, _) = app.review(session, word, correct).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get(&format!("/study_sessions/{}/words", session)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["german"], "das Haus");
    assert_eq!(data[0]["correct_count"], 2);
    assert_eq!(data[0]["wrong_count"], 1);
    assert_eq!(data[1]["german"], "der Hund");
    assert_eq!(data[1]["correct_count"], 0);
    assert_eq!(data[1]["wrong_count"], 1);

    let (status, _) = app.get("/study_sessions/9999/words").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_creates_each_read_back_their_own_row() {
    let app = spawn_app().await;
    let mut handles = Vec::new();
    for i in 0..20i64 {
        let store = app.store.clone();
        let group_id = i % 3 + 1;
        handles.push(tokio::spawn(async move {
            let session = store.create_session(group_id, 1).await.unwrap();
            assert_eq!(session.group_id, group_id);
            assert_eq!(session.study_activity_id, 1);
            session.id
        }));
    }
    let mut seen = HashSet::new();
    for h in handles {
        assert!(seen.insert(h.await.unwrap()));
    }
    assert_eq!(seen.len(), 20);
    assert_eq!(app.store.list_sessions_of_activity(1).await.unwrap().len(), 20);
}

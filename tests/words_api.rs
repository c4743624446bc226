mod common;

use axum::http::StatusCode;
use common::{error_code, ids, spawn_app};
use lang_portal::seed::{seeded_group_size, WORDS};
use std::collections::HashSet;

fn strings(body: &serde_json::Value, field: &str) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w[field].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn first_page_defaults_to_german_ascending() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], WORDS.len() as i64);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pages"], 3);
    let german = strings(&body, "german");
    assert_eq!(german.len(), 10);
    assert!(german.windows(2).all(|w| w[0] <= w[1]), "{german:?}");
}

#[tokio::test]
async fn pages_partition_all_words() {
    let app = spawn_app().await;
    let mut seen = HashSet::new();
    for page in 1..=3 {
        let (_, body) = app.get(&format!("/words?page={}&sort_by=id", page)).await;
        for id in ids(&body) {
            assert!(seen.insert(id), "word {id} on two pages");
        }
    }
    assert_eq!(seen.len(), WORDS.len());
}

#[tokio::test]
async fn page_past_the_end_is_empty_not_an_error() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words?page=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], 30);
    assert_eq!(body["page"], 4);
}

#[tokio::test]
async fn garbage_page_is_page_one() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    let (_, body) = app.get("/words?page=0").await;
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn sorts_descending_on_request() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words?sort_by=english&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let english = strings(&body, "english");
    assert!(english.windows(2).all(|w| w[0] >= w[1]), "{english:?}");

    let (_, body) = app.get("/words?sort_by=id&order=DESC").await;
    assert_eq!(ids(&body)[0], 30);
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let app = spawn_app().await;
    for q in ["sort_by=created_at", "sort_by=german%3B%20DROP%20TABLE%20words"] {
        let (status, body) = app.get(&format!("/words?{}", q)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "invalid_parameter");
    }
    let (_, body) = app.get("/words").await;
    assert_eq!(body["total"], 30);
}

#[tokio::test]
async fn get_word_is_stable() {
    let app = spawn_app().await;
    let (status, first) = app.get("/words/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["german"], "das Haus");
    assert_eq!(first["english"], "House");
    assert_eq!(first["class"], "noun");
    let (_, second) = app.get("/words/1").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_and_malformed_word_ids() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "not_found");

    let (status, body) = app.get("/words/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_parameter");
}

#[tokio::test]
async fn group_filter_counts_only_members() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words?group_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], seeded_group_size(1) as i64);
    assert_eq!(body["pages"], 1);

    let (_, body) = app.get("/words?group_id=2&page=2").await;
    let size = seeded_group_size(2) as i64;
    assert_eq!(body["total"], size);
    assert_eq!(body["data"].as_array().unwrap().len() as i64, size - 10);
}

#[tokio::test]
async fn group_filter_with_unknown_or_bad_group() {
    let app = spawn_app().await;
    let (status, _) = app.get("/words?group_id=99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/words?group_id=one").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_paging_keys_use_first_value() {
    let app = spawn_app().await;
    let (status, body) = app.get("/words?page=2&page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);

    let (status, body) = app.get("/words?sort_by=id&order=desc&order=asc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body)[0], 30);
}

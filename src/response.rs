//! Success response helpers. Single rows and catalog listings are returned bare; paginated
//! listings use the [`Paginated`] envelope.

use crate::pagination::{Page, PageRequest, Paginated};
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn paginated<T: Serialize>(page: Page<T>, request: PageRequest) -> (StatusCode, Json<Paginated<T>>) {
    (StatusCode::OK, Json(Paginated::new(page, request)))
}

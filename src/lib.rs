//! Lang portal: vocabulary study backend. Words, groups, study activities, study sessions and
//! review logging over REST, backed by SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use logging::init_tracing;
pub use migration::apply_migrations;
pub use routes::{api_routes, common_routes};
pub use seed::seed_if_empty;
pub use service::{GroupRepository, StudyActivityRepository, StudySessionRepository, WordRepository};
pub use state::AppState;
pub use store::Store;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, ConfigError> {
    let origin = match config.cors_allowed_origin.as_deref() {
        Some(o) => AllowOrigin::exact(HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidValue {
            key: "CORS_ALLOWED_ORIGIN",
            value: o.to_string(),
        })?),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Full application router: resource routes plus health/readiness/version/OpenAPI, wrapped in
/// request tracing, CORS and the body size limit.
pub fn app(state: AppState, config: &AppConfig) -> Result<Router, AppError> {
    Ok(common_routes(state.clone())
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

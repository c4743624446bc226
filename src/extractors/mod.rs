//! Request extractors whose rejections are [`crate::error::AppError`], so malformed input
//! answers with the same error body as every other failure.

mod json;
mod pagination;
mod query;

pub use json::AppJson;
pub use query::AppQuery;

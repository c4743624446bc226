//! `page`, `sort_by` and `order` straight from the query string into resolved requests.
//! Bad page numbers fall back to 1; an unknown `sort_by` rejects with 400. A repeated key
//! keeps its first value.

use super::AppQuery;
use crate::error::AppError;
use crate::pagination::{PageRequest, RawPageQuery, SortKey, SortedPageRequest};
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

async fn raw_query<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<RawPageQuery, AppError> {
    let AppQuery(pairs) = AppQuery::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
    Ok(RawPageQuery::from_pairs(pairs))
}

#[async_trait]
impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(PageRequest::resolve(&raw_query(parts, state).await?))
    }
}

#[async_trait]
impl<S, K> FromRequestParts<S> for SortedPageRequest<K>
where
    S: Send + Sync,
    K: SortKey,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        SortedPageRequest::resolve(&raw_query(parts, state).await?)
    }
}

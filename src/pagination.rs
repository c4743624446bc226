//! Page, sort and order resolution for listing endpoints.
//!
//! Raw query input is untrusted: page numbers may be missing or garbage, and sort fields
//! must map onto a fixed per-entity allow-list before they can reach SQL text.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Rows per page for every paginated listing.
pub const PAGE_SIZE: u32 = 10;

/// Query parameters exactly as received. Every field is optional text so that a bad value
/// resolves to a default (or a typed error) instead of an extractor rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPageQuery {
    pub page: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl RawPageQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut raw = RawPageQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut raw.page,
                "sort_by" => &mut raw.sort_by,
                "order" => &mut raw.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        raw
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` in any case is descending; anything else, including nothing, is ascending.
    pub fn resolve(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Per-entity allow-list of sortable columns. Implementors map client tokens to column
/// names known at compile time; nothing else is ever interpolated into a query.
pub trait SortKey: Copy + Send + Sync + 'static {
    fn default_key() -> Self;
    fn from_token(token: &str) -> Option<Self>;
    fn column(self) -> &'static str;
    /// Accepted tokens, for error messages.
    fn allowed() -> &'static [&'static str];

    fn resolve(token: Option<&str>) -> Result<Self, AppError> {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            None => Ok(Self::default_key()),
            Some(t) => Self::from_token(t).ok_or_else(|| {
                AppError::InvalidParameter(format!(
                    "sort_by '{}' is not one of: {}",
                    t,
                    Self::allowed().join(", ")
                ))
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordSort {
    Id,
    German,
    English,
    Class,
}

impl SortKey for WordSort {
    fn default_key() -> Self {
        WordSort::German
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "id" => Some(WordSort::Id),
            "german" => Some(WordSort::German),
            "english" => Some(WordSort::English),
            "class" => Some(WordSort::Class),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            WordSort::Id => "id",
            WordSort::German => "german",
            WordSort::English => "english",
            WordSort::Class => "class",
        }
    }

    fn allowed() -> &'static [&'static str] {
        &["id", "german", "english", "class"]
    }
}

/// Resolved 1-based page number. No upper bound: a page past the end is simply empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest { page: 1 }
    }
}

impl PageRequest {
    pub fn new(page: u32) -> Self {
        PageRequest { page: page.max(1) }
    }

    /// Absent, unparsable and non-positive values all become page 1.
    pub fn resolve(raw: &RawPageQuery) -> Self {
        let page = raw
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1);
        PageRequest { page }
    }

    pub fn limit(&self) -> i64 {
        i64::from(PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(PAGE_SIZE)
    }
}

/// Page plus a validated sort key and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortedPageRequest<S: SortKey> {
    pub page: PageRequest,
    pub sort: S,
    pub order: SortOrder,
}

impl<S: SortKey> SortedPageRequest<S> {
    pub fn resolve(raw: &RawPageQuery) -> Result<Self, AppError> {
        Ok(SortedPageRequest {
            page: PageRequest::resolve(raw),
            sort: S::resolve(raw.sort_by.as_deref())?,
            order: SortOrder::resolve(raw.order.as_deref()),
        })
    }
}

impl<S: SortKey> Default for SortedPageRequest<S> {
    fn default() -> Self {
        SortedPageRequest {
            page: PageRequest::default(),
            sort: S::default_key(),
            order: SortOrder::Asc,
        }
    }
}

/// `ceil(total / PAGE_SIZE)`; zero rows means zero pages.
pub fn page_count(total: i64) -> i64 {
    let size = i64::from(PAGE_SIZE);
    if total <= 0 {
        0
    } else {
        (total + size - 1) / size
    }
}

/// One page of rows together with the row count across all pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Wire envelope for paginated listings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(page: Page<T>, request: PageRequest) -> Self {
        Paginated {
            pages: page_count(page.total),
            data: page.items,
            total: page.total,
            page: request.page,
        }
    }
}

//! Builds parameterized SELECT and COUNT statements for the listing operations.

use crate::pagination::{PageRequest, SortOrder};

/// Static description of what a listing reads: select list, source table, joins and grouping.
/// Every fragment is a `'static` string written in this crate, never client input.
#[derive(Clone, Copy, Debug)]
pub struct Listing {
    pub columns: &'static str,
    pub from: &'static str,
    pub joins: &'static [&'static str],
    pub group_by: Option<&'static str>,
}

/// Equality filter on a qualified column; the value is bound, not interpolated.
#[derive(Clone, Copy, Debug)]
pub struct Filter {
    pub column: &'static str,
    pub value: i64,
}

impl Filter {
    pub fn eq(column: &'static str, value: i64) -> Self {
        Filter { column, value }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrderTerm {
    pub qualifier: Option<&'static str>,
    pub column: &'static str,
    pub order: SortOrder,
}

impl OrderTerm {
    pub const fn asc(column: &'static str) -> Self {
        OrderTerm { qualifier: None, column, order: SortOrder::Asc }
    }

    pub const fn desc(column: &'static str) -> Self {
        OrderTerm { qualifier: None, column, order: SortOrder::Desc }
    }

    /// `alias.column` with the given direction. Used for allow-listed sort keys.
    pub const fn qualified(qualifier: &'static str, column: &'static str, order: SortOrder) -> Self {
        OrderTerm { qualifier: Some(qualifier), column, order }
    }

    fn render(&self) -> String {
        match self.qualifier {
            Some(q) => format!("{}.{} {}", q, self.column, self.order.as_sql()),
            None => format!("{} {}", self.column, self.order.as_sql()),
        }
    }
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<i64>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }
}

fn from_clause(listing: &Listing) -> String {
    let mut out = format!(" FROM {}", listing.from);
    for join in listing.joins {
        out.push(' ');
        out.push_str(join);
    }
    out
}

fn where_clause(q: &mut QueryBuf, filters: &[Filter]) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = filters
        .iter()
        .map(|f| {
            q.params.push(f.value);
            format!("{} = ?", f.column)
        })
        .collect();
    format!(" WHERE {}", parts.join(" AND "))
}

fn group_clause(listing: &Listing) -> String {
    listing.group_by.map(|g| format!(" GROUP BY {}", g)).unwrap_or_default()
}

fn order_clause(ordering: &[OrderTerm]) -> String {
    if ordering.is_empty() {
        return String::new();
    }
    let terms: Vec<String> = ordering.iter().map(OrderTerm::render).collect();
    format!(" ORDER BY {}", terms.join(", "))
}

/// SELECT every matching row in the given order.
pub fn select_all(listing: &Listing, filters: &[Filter], ordering: &[OrderTerm]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let from = from_clause(listing);
    let where_ = where_clause(&mut q, filters);
    q.sql = format!(
        "SELECT {}{}{}{}{}",
        listing.columns,
        from,
        where_,
        group_clause(listing),
        order_clause(ordering)
    );
    q
}

/// SELECT one page: same as [`select_all`] plus `LIMIT ? OFFSET ?` bound after the filters.
pub fn select_page(
    listing: &Listing,
    filters: &[Filter],
    ordering: &[OrderTerm],
    page: &PageRequest,
) -> QueryBuf {
    let mut q = select_all(listing, filters, ordering);
    q.sql.push_str(" LIMIT ? OFFSET ?");
    q.params.push(page.limit());
    q.params.push(page.offset());
    q
}

/// COUNT of rows the listing would return across all pages.
pub fn count(listing: &Listing, filters: &[Filter]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let from = from_clause(listing);
    let where_ = where_clause(&mut q, filters);
    q.sql = match listing.group_by {
        Some(_) => format!(
            "SELECT COUNT(*) FROM (SELECT 1{}{}{})",
            from,
            where_,
            group_clause(listing)
        ),
        None => format!("SELECT COUNT(*){}{}", from, where_),
    };
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: Listing = Listing {
        columns: "w.id, w.german",
        from: "words w",
        joins: &[],
        group_by: None,
    };

    const GROUP_WORDS: Listing = Listing {
        columns: "w.id, w.german",
        from: "words w",
        joins: &["JOIN word_groups wg ON wg.word_id = w.id"],
        group_by: None,
    };

    const TALLY: Listing = Listing {
        columns: "w.id, COUNT(*) AS n",
        from: "words w",
        joins: &["JOIN word_review_items r ON r.word_id = w.id"],
        group_by: Some("w.id"),
    };

    #[test]
    fn page_binds_limit_and_offset_after_filters() {
        let q = select_page(
            &GROUP_WORDS,
            &[Filter::eq("wg.group_id", 4)],
            &[OrderTerm::qualified("w", "german", SortOrder::Desc), OrderTerm::asc("w.id")],
            &PageRequest::new(2),
        );
        assert_eq!(
            q.sql,
            "SELECT w.id, w.german FROM words w JOIN word_groups wg ON wg.word_id = w.id \
             WHERE wg.group_id = ? ORDER BY w.german DESC, w.id ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(q.params, vec![4, 10, 10]);
    }

    #[test]
    fn select_all_without_filters_or_order() {
        let q = select_all(&WORDS, &[], &[]);
        assert_eq!(q.sql, "SELECT w.id, w.german FROM words w");
        assert!(q.params.is_empty());
    }

    #[test]
    fn count_uses_same_source_and_filters() {
        let q = count(&GROUP_WORDS, &[Filter::eq("wg.group_id", 1)]);
        assert_eq!(
            q.sql,
            "SELECT COUNT(*) FROM words w JOIN word_groups wg ON wg.word_id = w.id WHERE wg.group_id = ?"
        );
        assert_eq!(q.params, vec![1]);
    }

    #[test]
    fn grouped_count_wraps_in_subquery() {
        let q = count(&TALLY, &[Filter::eq("r.study_session_id", 9)]);
        assert_eq!(
            q.sql,
            "SELECT COUNT(*) FROM (SELECT 1 FROM words w JOIN word_review_items r ON r.word_id = w.id \
             WHERE r.study_session_id = ? GROUP BY w.id)"
        );
    }
}

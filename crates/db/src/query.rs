//! SQL rendering for compiled list queries.
//!
//! Only column identifiers from [`QueryField::column`] are interpolated;
//! every client-supplied value travels as a numbered bind parameter.

use catalog_core::query::{ListQuery, Predicate, QueryField, Sort};

/// Rendered `WHERE`/`ORDER BY`/`LIMIT` tail of a list query plus the text
/// values to bind, in order. Page limit and offset, when present, are bound
/// after the text values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderedQuery {
    pub tail: String,
    pub text_binds: Vec<String>,
}

/// Render the `WHERE` clause for a predicate.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty for a match-all predicate, otherwise it starts with `WHERE `. A
/// predicate that can match no row renders as `WHERE FALSE` with no binds.
pub(crate) fn build_filter<F: QueryField>(
    predicate: &Predicate<F>,
) -> (String, Vec<String>, u32) {
    if predicate.is_match_none() {
        return ("WHERE FALSE".to_string(), Vec::new(), 1);
    }

    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;

    for clause in predicate.clauses() {
        conditions.push(format!(
            "{} LIKE ${bind_idx} ESCAPE '\\'",
            clause.field.column()
        ));
        bind_idx += 1;
        bind_values.push(clause.like_pattern());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Render the `ORDER BY` clause. `id` always breaks ties so that paging is
/// deterministic.
pub(crate) fn build_order<F: QueryField>(sort: Option<Sort<F>>) -> String {
    match sort {
        Some(sort) => format!(
            "ORDER BY {} {}, id ASC",
            sort.field.column(),
            sort.order.as_sql()
        ),
        None => "ORDER BY id ASC".to_string(),
    }
}

/// Render everything after `FROM <table>` for a list query.
pub(crate) fn render<F: QueryField>(query: &ListQuery<F>) -> RenderedQuery {
    let (where_clause, text_binds, bind_idx) = build_filter(&query.predicate);
    let order_clause = build_order(query.sort);

    let mut parts = Vec::with_capacity(3);
    if !where_clause.is_empty() {
        parts.push(where_clause);
    }
    parts.push(order_clause);
    if query.page.is_some() {
        parts.push(format!("LIMIT ${bind_idx} OFFSET ${}", bind_idx + 1));
    }

    RenderedQuery {
        tail: parts.join(" "),
        text_binds,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

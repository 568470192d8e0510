//! Translation of raw client query parameters into bounded, safe list
//! query modifiers.
//!
//! Two stages run over the same parameter map:
//!
//! - [`filter`] keeps only allow-listed keys and turns each into a
//!   substring-match clause.
//! - [`paging`] resolves `sortField` / `sortOrder` / `page` / `pageSize`.
//!
//! Neither stage errors: unrecognized input is dropped and the query falls
//! back to its unconstrained form. Column names only ever come from
//! [`QueryField::column`], never from the request.

pub mod filter;
pub mod paging;

use std::collections::HashMap;
use std::fmt;

pub use filter::{Contains, Predicate};
pub use paging::{Page, Sort, SortOrder};

/// Raw `?key=value` pairs as received from the client.
pub type QueryParams = HashMap<String, String>;

/// A column a client is allowed to reference by name.
pub trait QueryField: Copy + Eq + fmt::Debug {
    /// The SQL column this field maps to. Must be a static identifier.
    fn column(self) -> &'static str;
}

/// Look up an allow-listed field by its client-facing key.
pub(crate) fn lookup<F: QueryField>(allow: &[(&str, F)], key: &str) -> Option<F> {
    allow
        .iter()
        .find_map(|(name, field)| (*name == key).then_some(*field))
}

/// Filter, sort and page modifiers for one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub predicate: Predicate<F>,
    pub sort: Option<Sort<F>>,
    pub page: Option<Page>,
}

impl<F: QueryField> ListQuery<F> {
    /// Compile a list query from raw parameters against separate filter and
    /// sort allow-lists.
    pub fn from_params(
        params: &QueryParams,
        filter_fields: &[(&str, F)],
        sort_fields: &[(&str, F)],
    ) -> Self {
        Self {
            predicate: filter::compile(params, filter_fields),
            sort: paging::resolve_sort(params, sort_fields),
            page: paging::resolve_page(params),
        }
    }
}

impl<F> Default for ListQuery<F> {
    /// Match everything, default order, no paging.
    fn default() -> Self {
        Self {
            predicate: Predicate::default(),
            sort: None,
            page: None,
        }
    }
}

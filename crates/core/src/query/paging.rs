//! Sort and page resolution for list queries.

use super::{lookup, QueryField, QueryParams};

// ---------------------------------------------------------------------------
// Parameter names and bounds
// ---------------------------------------------------------------------------

pub const PARAM_SORT_FIELD: &str = "sortField";
pub const PARAM_SORT_ORDER: &str = "sortOrder";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PAGE_SIZE: &str = "pageSize";

/// Page size used when `pageSize` is absent or not a positive integer.
pub const DEFAULT_PAGE_SIZE: i64 = 2;

/// Upper bound on `pageSize`; larger requests are clamped.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Descending iff the raw value is `-1` or `desc` (any case).
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("-1") => Self::Desc,
            Some(s) if s.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub order: SortOrder,
}

/// Resolve `sortField` / `sortOrder`.
///
/// Returns `None` when no field is requested or the field is not in
/// `allow`; callers then fall back to their default ordering.
pub fn resolve_sort<F: QueryField>(
    params: &QueryParams,
    allow: &[(&str, F)],
) -> Option<Sort<F>> {
    let requested = params
        .get(PARAM_SORT_FIELD)
        .map(String::as_str)
        .filter(|s| !s.is_empty())?;

    let field = lookup(allow, requested)?;
    Some(Sort {
        field,
        order: SortOrder::parse(params.get(PARAM_SORT_ORDER).map(String::as_str)),
    })
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A zero-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: i64,
    pub size: i64,
}

impl Page {
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// `index * size`, saturating instead of overflowing.
    pub fn offset(&self) -> i64 {
        self.index.saturating_mul(self.size)
    }
}

/// Resolve `page` / `pageSize`.
///
/// A missing or invalid `page` means "no paging": the full filtered set is
/// returned. `pageSize` only matters when `page` is valid.
pub fn resolve_page(params: &QueryParams) -> Option<Page> {
    let index = params
        .get(PARAM_PAGE)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|i| *i >= 0)?;

    Some(Page {
        index,
        size: resolve_page_size(params.get(PARAM_PAGE_SIZE).map(String::as_str)),
    })
}

/// Parse a page size, falling back to [`DEFAULT_PAGE_SIZE`] for anything
/// that is not a positive integer and clamping to [`MAX_PAGE_SIZE`].
pub fn resolve_page_size(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

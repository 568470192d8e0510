//! Item field definitions: the category enumeration and the query
//! allow-lists for filtering and sorting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::query::{ListQuery, QueryField, QueryParams};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comedy,
    Horror,
    Drama,
}

impl Category {
    /// All valid category values, in their stored form.
    pub const ALL: &'static [&'static str] = &["comedy", "horror", "drama"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comedy => "comedy",
            Self::Horror => "horror",
            Self::Drama => "drama",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Exact, case-sensitive match against [`Category::ALL`]. Anything else
    /// is rejected rather than coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comedy" => Ok(Self::Comedy),
            "horror" => Ok(Self::Horror),
            "drama" => Ok(Self::Drama),
            _ => Err(CoreError::Validation(format!(
                "Unknown category: '{s}'. Valid categories: {}",
                Self::ALL.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Title
// ---------------------------------------------------------------------------

/// Reject titles that text storage cannot hold.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.contains('\0') {
        return Err(CoreError::Validation(
            "Item title must not contain NUL characters".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Query fields
// ---------------------------------------------------------------------------

/// Item columns that a client may reference from a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Title,
    Category,
    Date,
}

impl QueryField for ItemField {
    fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Date => "date",
        }
    }
}

/// Query keys accepted as substring filters on `GET /items`.
pub const ITEM_FILTER_FIELDS: &[(&str, ItemField)] = &[
    ("title", ItemField::Title),
    ("category", ItemField::Category),
];

/// Values accepted for `sortField` on `GET /items`.
pub const ITEM_SORT_FIELDS: &[(&str, ItemField)] = &[
    ("title", ItemField::Title),
    ("category", ItemField::Category),
    ("date", ItemField::Date),
];

/// Compile raw `GET /items` parameters against the item allow-lists.
pub fn item_list_query(params: &QueryParams) -> ListQuery<ItemField> {
    ListQuery::from_params(params, ITEM_FILTER_FIELDS, ITEM_SORT_FIELDS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

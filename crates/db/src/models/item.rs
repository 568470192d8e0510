//! Item entity model and DTOs.

use catalog_core::item::Category;
use catalog_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
}

/// DTO for updating an existing item.
///
/// Only `title`, `category` and `date` are settable; any other key in the
/// request body is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

/// One page of a filtered item listing.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPage {
    pub records: Vec<Item>,
    /// Cardinality of the whole `items` table. Not affected by filters or
    /// paging.
    pub count: i64,
}

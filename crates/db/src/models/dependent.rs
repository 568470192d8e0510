//! Dependent entity model and DTOs.

use catalog_core::dependent::Role;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dependent row from the `dependents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dependent {
    pub id: DbId,
    pub item_id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new dependent. The owning item comes from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDependent {
    pub name: String,
    pub role: String,
}

/// DTO for updating an existing dependent.
///
/// `item_id` is not settable; a dependent stays with the item it was
/// created under.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDependent {
    pub name: Option<String>,
    pub role: Option<String>,
}

//! Response payloads that are not plain entity rows.

use catalog_core::types::DbId;
use serde::Serialize;

/// Body of `DELETE /items/{id}`.
#[derive(Debug, Serialize)]
pub struct ItemDeleted {
    pub id: DbId,
    /// Number of dependents removed along with the item.
    pub dependents_removed: u64,
}

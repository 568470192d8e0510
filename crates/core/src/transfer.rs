//! Whole-graph export/import document format.
//!
//! The document is a JSON array of item descriptors, each embedding its
//! dependents. Ids are never part of the document; on import every record
//! gets a fresh id and dependents are linked to the item they are nested
//! under.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// One item in an export/import document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub dependents: Vec<DependentDescriptor>,
}

/// One dependent nested under an [`ItemDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentDescriptor {
    /// Caller-supplied correlation key. Absent in exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    pub role: String,
}

/// Result of an export.
///
/// An empty catalog is reported as [`ExportOutcome::NoContent`], never as an
/// empty document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    NoContent,
    Document(Vec<ItemDescriptor>),
}

// ---------------------------------------------------------------------------
// Correlation registry
// ---------------------------------------------------------------------------

/// Correlation key to the ids of every dependent imported under it.
///
/// A key may be reused across items to mark the same real-world dependent
/// appearing in several places. The registry is filled during import and
/// reported in the summary; nothing resolves cross-item references from it
/// yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrelationRegistry {
    entries: HashMap<String, Vec<DbId>>,
}

impl CorrelationRegistry {
    pub fn record(&mut self, key: &str, dependent_id: DbId) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(dependent_id);
    }

    /// Dependent ids recorded under `key`, in import order.
    pub fn get(&self, key: &str) -> &[DbId] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Import report
// ---------------------------------------------------------------------------

/// Running tally of an import, including the correlation registry.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub items_created: usize,
    pub dependents_created: usize,
    pub registry: CorrelationRegistry,
}

impl ImportReport {
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            items_created: self.items_created,
            dependents_created: self.dependents_created,
            correlation_keys: self.registry.len(),
        }
    }
}

/// Counts of what an import created, as returned to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub items_created: usize,
    pub dependents_created: usize,
    /// Distinct correlation keys seen.
    pub correlation_keys: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

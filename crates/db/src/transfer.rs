//! Whole-graph export and import.
//!
//! Import is not atomic across the document. Each item and each dependent
//! is its own single-row write; if a later descriptor fails, everything
//! created before it stays in place and the error is returned to the
//! caller.

use catalog_core::transfer::{DependentDescriptor, ExportOutcome, ImportReport, ItemDescriptor};

use crate::models::dependent::CreateDependent;
use crate::models::item::CreateItem;
use crate::repositories::{DependentRepo, ItemRepo};
use crate::DbResult;

/// Export/import over the item and dependent repositories.
#[derive(Clone)]
pub struct BulkTransfer {
    items: ItemRepo,
    dependents: DependentRepo,
}

impl BulkTransfer {
    pub fn new(items: ItemRepo, dependents: DependentRepo) -> Self {
        Self { items, dependents }
    }

    /// Walk every item and its dependents into one denormalized document.
    pub async fn export_all(&self) -> DbResult<ExportOutcome> {
        let items = self.items.list_all().await?;
        if items.is_empty() {
            return Ok(ExportOutcome::NoContent);
        }

        let mut document = Vec::with_capacity(items.len());
        for item in items {
            let dependents = self
                .dependents
                .find_children(item.id)
                .await?
                .into_iter()
                .map(|d| DependentDescriptor {
                    key: None,
                    name: d.name,
                    role: d.role.as_str().to_string(),
                })
                .collect();

            document.push(ItemDescriptor {
                title: item.title,
                category: item.category.as_str().to_string(),
                date: item.date,
                dependents,
            });
        }

        tracing::info!(items = document.len(), "Catalog exported");
        Ok(ExportOutcome::Document(document))
    }

    /// Recreate every item in `document` and link its dependents to it.
    ///
    /// Dependents carrying a correlation key are recorded in the report's
    /// registry under that key.
    pub async fn import_all(&self, document: &[ItemDescriptor]) -> DbResult<ImportReport> {
        let mut report = ImportReport::default();

        for (position, descriptor) in document.iter().enumerate() {
            if let Err(err) = self.import_item(position, descriptor, &mut report).await {
                tracing::warn!(
                    position,
                    items_created = report.items_created,
                    dependents_created = report.dependents_created,
                    error = %err,
                    "Import aborted; records created so far are kept",
                );
                return Err(err);
            }
        }

        tracing::info!(
            items_created = report.items_created,
            dependents_created = report.dependents_created,
            correlation_keys = report.registry.len(),
            "Catalog imported",
        );
        Ok(report)
    }

    async fn import_item(
        &self,
        position: usize,
        descriptor: &ItemDescriptor,
        report: &mut ImportReport,
    ) -> DbResult<()> {
        let item = self
            .items
            .create(&CreateItem {
                title: descriptor.title.clone(),
                category: descriptor.category.clone(),
                date: descriptor.date,
            })
            .await
            .map_err(|err| err.with_context(format!("Item #{position}")))?;
        report.items_created += 1;

        for (child_position, child) in descriptor.dependents.iter().enumerate() {
            let dependent = self
                .dependents
                .create(
                    item.id,
                    &CreateDependent {
                        name: child.name.clone(),
                        role: child.role.clone(),
                    },
                )
                .await
                .map_err(|err| {
                    err.with_context(format!("Item #{position}, dependent #{child_position}"))
                })?;
            report.dependents_created += 1;

            if let Some(key) = &child.key {
                report.registry.record(key, dependent.id);
            }
        }

        Ok(())
    }
}

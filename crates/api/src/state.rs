use std::sync::Arc;

use catalog_db::repositories::{DependentRepo, ItemRepo};
use catalog_db::transfer::BulkTransfer;
use catalog_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and repositories are handles).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    pub items: ItemRepo,
    pub dependents: DependentRepo,
    pub transfer: BulkTransfer,
}

impl AppState {
    /// Wire every repository to the same pool.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let items = ItemRepo::new(pool.clone());
        let dependents = DependentRepo::new(pool.clone());
        let transfer = BulkTransfer::new(items.clone(), dependents.clone());
        Self {
            pool,
            config: Arc::new(config),
            items,
            dependents,
            transfer,
        }
    }
}

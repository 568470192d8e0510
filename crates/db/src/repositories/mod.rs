//! Repository layer.
//!
//! Each repository owns a clone of the [`DbPool`](crate::DbPool) it was
//! constructed with and exposes async CRUD methods returning
//! [`DbResult`](crate::DbResult).

pub mod dependent_repo;
pub mod item_repo;

pub use dependent_repo::DependentRepo;
pub use item_repo::ItemRepo;

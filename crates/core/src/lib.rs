//! Domain layer for the catalog service.
//!
//! Holds everything that does not touch I/O: shared types, the error
//! taxonomy, field enumerations and validators, query compilation
//! (filter, sort, page) and the bulk transfer document format.

pub mod dependent;
pub mod error;
pub mod item;
pub mod query;
pub mod transfer;
pub mod types;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Enumerated fields arrive as raw strings in the DTOs and are checked by
//! the repositories, so an invalid value surfaces as a validation error
//! with a specific message.

pub mod dependent;
pub mod item;

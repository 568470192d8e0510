use catalog_core::error::CoreError;

/// Error returned by repositories.
///
/// Domain failures (validation, missing parent or child) stay distinguishable
/// from storage failures so the transport layer can map them separately.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// See [`CoreError::with_context`]. Storage errors pass through.
    pub fn with_context(self, context: impl std::fmt::Display) -> Self {
        match self {
            Self::Core(core) => Self::Core(core.with_context(context)),
            other => other,
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: catalog_core::types::DbId) -> Self {
        Self::Core(CoreError::NotFound { entity, id })
    }
}

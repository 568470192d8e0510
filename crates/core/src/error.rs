use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Prefix a validation message with where the offending value sits,
    /// e.g. `"Item #3"`. Other variants are returned unchanged.
    pub fn with_context(self, context: impl std::fmt::Display) -> Self {
        match self {
            Self::Validation(msg) => Self::Validation(format!("{context}: {msg}")),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_validation_messages() {
        let err = CoreError::Validation("bad role".into()).with_context("Item #2");
        assert_eq!(err.to_string(), "Validation failed: Item #2: bad role");
    }

    #[test]
    fn context_leaves_not_found_alone() {
        let err = CoreError::NotFound {
            entity: "Item",
            id: 9,
        }
        .with_context("Item #0");
        assert!(matches!(err, CoreError::NotFound { id: 9, .. }));
    }
}

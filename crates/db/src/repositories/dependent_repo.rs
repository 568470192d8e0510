//! Repository for the `dependents` table.
//!
//! Every public operation except [`DependentRepo::find_children`] is scoped
//! by the owning item: the parent must exist, and a dependent id is only
//! resolved within that parent. A valid dependent id looked up under the
//! wrong item is `NotFound`.

use catalog_core::dependent::{validate_name, Role};
use catalog_core::types::DbId;

use crate::models::dependent::{CreateDependent, Dependent, UpdateDependent};
use crate::{DbError, DbPool, DbResult};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_id, name, role, created_at, updated_at";

/// PostgreSQL `foreign_key_violation`.
const FK_VIOLATION: &str = "23503";

/// CRUD over dependents, always through their parent item.
#[derive(Clone)]
pub struct DependentRepo {
    pool: DbPool,
}

impl DependentRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fail with `NotFound` unless the item exists.
    pub async fn ensure_item(&self, item_id: DbId) -> DbResult<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)")
                .bind(item_id)
                .fetch_one(&self.pool)
                .await?;

        if exists {
            Ok(())
        } else {
            tracing::debug!(item_id, "Parent item not found");
            Err(DbError::not_found("Item", item_id))
        }
    }

    /// All dependents of an item, ordered by id. Does not check that the
    /// item exists; an unknown item simply has no children.
    pub async fn find_children(&self, item_id: DbId) -> DbResult<Vec<Dependent>> {
        let query = format!(
            "SELECT {COLUMNS} FROM dependents \
             WHERE item_id = $1 \
             ORDER BY id ASC"
        );
        let dependents = sqlx::query_as::<_, Dependent>(&query)
            .bind(item_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(dependents)
    }

    /// All dependents of an existing item.
    pub async fn list_by_item(&self, item_id: DbId) -> DbResult<Vec<Dependent>> {
        self.ensure_item(item_id).await?;
        self.find_children(item_id).await
    }

    /// One dependent, resolved through its parent.
    pub async fn get(&self, item_id: DbId, dependent_id: DbId) -> DbResult<Dependent> {
        self.ensure_item(item_id).await?;

        let query =
            format!("SELECT {COLUMNS} FROM dependents WHERE id = $1 AND item_id = $2");
        sqlx::query_as::<_, Dependent>(&query)
            .bind(dependent_id)
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| dependent_not_found(item_id, dependent_id))
    }

    /// Create a dependent under an existing item.
    ///
    /// The parent check comes first, so a missing parent is reported as
    /// `NotFound` even when the fields are also invalid. The insert itself
    /// re-checks the parent, so an item deleted in between still yields
    /// `NotFound` and never a dangling row.
    pub async fn create(&self, item_id: DbId, input: &CreateDependent) -> DbResult<Dependent> {
        self.ensure_item(item_id).await?;
        validate_name(&input.name)?;
        let role: Role = input.role.parse()?;

        let query = format!(
            "INSERT INTO dependents (item_id, name, role) \
             SELECT $1, $2, $3 \
             WHERE EXISTS (SELECT 1 FROM items WHERE id = $1) \
             RETURNING {COLUMNS}"
        );
        let dependent = sqlx::query_as::<_, Dependent>(&query)
            .bind(item_id)
            .bind(&input.name)
            .bind(role.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| parent_vanished(err, item_id))?
            .ok_or_else(|| DbError::not_found("Item", item_id))?;

        tracing::info!(item_id, dependent_id = dependent.id, "Dependent created");
        Ok(dependent)
    }

    /// Update a dependent within its parent. Only non-`None` fields in
    /// `input` are applied.
    pub async fn update(
        &self,
        item_id: DbId,
        dependent_id: DbId,
        input: &UpdateDependent,
    ) -> DbResult<Dependent> {
        self.get(item_id, dependent_id).await?;

        if let Some(name) = &input.name {
            validate_name(name)?;
        }
        let role = input
            .role
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()?;

        let query = format!(
            "UPDATE dependents SET \
                name = COALESCE($3, name), \
                role = COALESCE($4, role), \
                updated_at = NOW() \
             WHERE id = $1 AND item_id = $2 \
             RETURNING {COLUMNS}"
        );
        let dependent = sqlx::query_as::<_, Dependent>(&query)
            .bind(dependent_id)
            .bind(item_id)
            .bind(input.name.as_deref())
            .bind(role.map(|r| r.as_str()))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| dependent_not_found(item_id, dependent_id))?;

        tracing::info!(item_id, dependent_id, "Dependent updated");
        Ok(dependent)
    }

    /// Delete a dependent within its parent, returning the removed row.
    pub async fn delete(&self, item_id: DbId, dependent_id: DbId) -> DbResult<Dependent> {
        self.ensure_item(item_id).await?;

        let query = format!(
            "DELETE FROM dependents \
             WHERE id = $1 AND item_id = $2 \
             RETURNING {COLUMNS}"
        );
        let dependent = sqlx::query_as::<_, Dependent>(&query)
            .bind(dependent_id)
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| dependent_not_found(item_id, dependent_id))?;

        tracing::info!(item_id, dependent_id, "Dependent deleted");
        Ok(dependent)
    }
}

fn dependent_not_found(item_id: DbId, dependent_id: DbId) -> DbError {
    tracing::debug!(item_id, dependent_id, "Dependent not found under item");
    DbError::not_found("Dependent", dependent_id)
}

/// Map a foreign key violation on insert (the parent was deleted after the
/// existence check) to `NotFound` for the parent.
fn parent_vanished(err: sqlx::Error, item_id: DbId) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FK_VIOLATION) {
            return DbError::not_found("Item", item_id);
        }
    }
    DbError::Storage(err)
}

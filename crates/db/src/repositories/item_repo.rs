//! Repository for the `items` table.

use catalog_core::item::{validate_title, Category, ItemField};
use catalog_core::query::ListQuery;
use catalog_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::item::{CreateItem, Item, ItemPage, UpdateItem};
use crate::query::render;
use crate::{DbError, DbPool, DbResult};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, date, created_at, updated_at";

/// CRUD over items, plus filtered/sorted/paged listing.
#[derive(Clone)]
pub struct ItemRepo {
    pool: DbPool,
}

impl ItemRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List items matching `query`.
    ///
    /// `count` in the result is the size of the whole table, not of the
    /// filtered set, so paging controls driven by it reflect the unfiltered
    /// total.
    pub async fn list(&self, query: &ListQuery<ItemField>) -> DbResult<ItemPage> {
        let rendered = render(query);
        let sql = format!("SELECT {COLUMNS} FROM items {}", rendered.tail);

        let mut q = sqlx::query_as::<_, Item>(&sql);
        for value in &rendered.text_binds {
            q = q.bind(value.as_str());
        }
        if let Some(page) = query.page {
            q = q.bind(page.limit()).bind(page.offset());
        }

        let records = q.fetch_all(&self.pool).await?;
        let count = self.count().await?;

        Ok(ItemPage { records, count })
    }

    /// Every item, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Item>> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id ASC");
        let items = sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Total number of items, ignoring any filter.
    pub async fn count(&self) -> DbResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a new item after checking its title and category.
    pub async fn create(&self, input: &CreateItem) -> DbResult<Item> {
        validate_title(&input.title)?;
        let category: Category = input.category.parse()?;
        let item = insert(&self.pool, input, category).await?;
        tracing::info!(item_id = item.id, "Item created");
        Ok(item)
    }

    /// Insert several items in one transaction.
    ///
    /// Every element is validated before anything is written; either all
    /// rows are created or none are.
    pub async fn create_many(&self, inputs: &[CreateItem]) -> DbResult<Vec<Item>> {
        let categories = inputs
            .iter()
            .enumerate()
            .map(|(position, input)| {
                validate_title(&input.title)
                    .and_then(|()| input.category.parse::<Category>())
                    .map_err(|err| err.with_context(format!("Item #{position}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for (input, category) in inputs.iter().zip(categories) {
            created.push(insert(&mut *tx, input, category).await?);
        }
        tx.commit().await?;

        tracing::info!(count = created.len(), "Items created in bulk");
        Ok(created)
    }

    /// Find an item by id.
    pub async fn find_by_id(&self, id: DbId) -> DbResult<Option<Item>> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    /// Find an item by id, failing with `NotFound` if it does not exist.
    pub async fn get_by_id(&self, id: DbId) -> DbResult<Item> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", id))
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// A missing item is reported before any field is validated.
    pub async fn update(&self, id: DbId, input: &UpdateItem) -> DbResult<Item> {
        self.get_by_id(id).await?;

        if let Some(title) = &input.title {
            validate_title(title)?;
        }
        let category = input
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;

        let query = format!(
            "UPDATE items SET \
                title = COALESCE($2, title), \
                category = COALESCE($3, category), \
                date = COALESCE($4, date), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(category.map(|c| c.as_str()))
            .bind(input.date)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Item", id))?;

        tracing::info!(item_id = id, "Item updated");
        Ok(item)
    }

    /// Delete an item together with all of its dependents.
    ///
    /// Both deletes run in one transaction. Returns the number of dependents
    /// removed.
    pub async fn delete(&self, id: DbId) -> DbResult<u64> {
        let mut tx = self.pool.begin().await?;

        let dependents_removed = sqlx::query("DELETE FROM dependents WHERE item_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            // Dropping `tx` rolls back.
            return Err(DbError::not_found("Item", id));
        }
        tx.commit().await?;

        tracing::info!(item_id = id, dependents_removed, "Item deleted");
        Ok(dependents_removed)
    }
}

/// Shared insert used by both single and bulk creation.
async fn insert<'e, E>(
    executor: E,
    input: &CreateItem,
    category: Category,
) -> Result<Item, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "INSERT INTO items (title, category, date) \
         VALUES ($1, $2, $3) \
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, Item>(&query)
        .bind(&input.title)
        .bind(category.as_str())
        .bind(input.date)
        .fetch_one(executor)
        .await
}

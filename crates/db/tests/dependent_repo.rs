//! Integration tests for parent-scoped dependent operations.

use assert_matches::assert_matches;
use catalog_core::dependent::Role;
use catalog_core::error::CoreError;
use catalog_db::models::dependent::{CreateDependent, UpdateDependent};
use catalog_db::models::item::{CreateItem, Item};
use catalog_db::repositories::{DependentRepo, ItemRepo};
use catalog_db::DbError;
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn make_item(pool: &PgPool, title: &str) -> Item {
    ItemRepo::new(pool.clone())
        .create(&CreateItem {
            title: title.to_string(),
            category: "drama".to_string(),
            date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        })
        .await
        .unwrap()
}

fn new_dependent(name: &str, role: &str) -> CreateDependent {
    CreateDependent {
        name: name.to_string(),
        role: role.to_string(),
    }
}

async fn dependent_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM dependents")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_under_item(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool);

    let ann = repo
        .create(item.id, &new_dependent("Ann Roth", "WRITER"))
        .await
        .unwrap();
    let bob = repo
        .create(item.id, &new_dependent("Bob Fosse", "DIRECTOR"))
        .await
        .unwrap();
    assert_eq!(ann.item_id, item.id);
    assert_eq!(bob.role, Role::Director);

    let listed = repo.list_by_item(item.id).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![ann.id, bob.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_under_missing_item_is_not_found(pool: PgPool) {
    let repo = DependentRepo::new(pool);
    assert_matches!(
        repo.list_by_item(5).await,
        Err(DbError::Core(CoreError::NotFound { entity: "Item", id: 5 }))
    );
    assert!(repo.find_children(5).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_under_missing_item_writes_nothing(pool: PgPool) {
    let repo = DependentRepo::new(pool.clone());
    let result = repo.create(99, &new_dependent("Ann Roth", "WRITER")).await;

    assert_matches!(
        result,
        Err(DbError::Core(CoreError::NotFound { entity: "Item", id: 99 }))
    );
    assert_eq!(dependent_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_parent_wins_over_invalid_fields(pool: PgPool) {
    let repo = DependentRepo::new(pool);
    let result = repo.create(99, &new_dependent("Al", "ACTOR")).await;
    assert_matches!(result, Err(DbError::Core(CoreError::NotFound { .. })));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_short_name_is_rejected(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool.clone());

    let result = repo.create(item.id, &new_dependent("Al", "WRITER")).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));
    assert_eq!(dependent_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_with_nul_is_rejected(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool.clone());

    let result = repo.create(item.id, &new_dependent("Ann\0Roth", "WRITER")).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));
    assert_eq!(dependent_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_length_bounds(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool);

    let shortest = "Ann".to_string();
    let longest = "x".repeat(45);
    let too_long = "x".repeat(46);

    assert!(repo
        .create(item.id, &new_dependent(&shortest, "WRITER"))
        .await
        .is_ok());
    assert!(repo
        .create(item.id, &new_dependent(&longest, "WRITER"))
        .await
        .is_ok());
    assert_matches!(
        repo.create(item.id, &new_dependent(&too_long, "WRITER")).await,
        Err(DbError::Core(CoreError::Validation(_)))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_is_rejected(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool);

    let result = repo.create(item.id, &new_dependent("Ann Roth", "writer")).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(msg))) if msg.contains("writer"));
}

// ---------------------------------------------------------------------------
// Scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dependent_is_not_visible_under_other_item(pool: PgPool) {
    let heat = make_item(&pool, "Heat").await;
    let ronin = make_item(&pool, "Ronin").await;
    let repo = DependentRepo::new(pool);

    let ann = repo
        .create(heat.id, &new_dependent("Ann Roth", "WRITER"))
        .await
        .unwrap();

    assert_matches!(
        repo.get(ronin.id, ann.id).await,
        Err(DbError::Core(CoreError::NotFound { entity: "Dependent", .. }))
    );
    assert_matches!(
        repo.update(
            ronin.id,
            ann.id,
            &UpdateDependent {
                name: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await,
        Err(DbError::Core(CoreError::NotFound { entity: "Dependent", .. }))
    );
    assert_matches!(
        repo.delete(ronin.id, ann.id).await,
        Err(DbError::Core(CoreError::NotFound { entity: "Dependent", .. }))
    );

    let untouched = repo.get(heat.id, ann.id).await.unwrap();
    assert_eq!(untouched.name, "Ann Roth");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_under_missing_item_reports_item(pool: PgPool) {
    let repo = DependentRepo::new(pool);
    assert_matches!(
        repo.get(8, 1).await,
        Err(DbError::Core(CoreError::NotFound { entity: "Item", id: 8 }))
    );
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_changes_only_given_fields(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool);
    let ann = repo
        .create(item.id, &new_dependent("Ann Roth", "WRITER"))
        .await
        .unwrap();

    let updated = repo
        .update(
            item.id,
            ann.id,
            &UpdateDependent {
                role: Some("DIRECTOR".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ann Roth");
    assert_eq!(updated.role, Role::Director);
    assert_eq!(updated.item_id, item.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_invalid_name_keeps_row(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool);
    let ann = repo
        .create(item.id, &new_dependent("Ann Roth", "WRITER"))
        .await
        .unwrap();

    let result = repo
        .update(
            item.id,
            ann.id,
            &UpdateDependent {
                name: Some("Al".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));
    assert_eq!(repo.get(item.id, ann.id).await.unwrap().name, "Ann Roth");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_removed_row(pool: PgPool) {
    let item = make_item(&pool, "Heat").await;
    let repo = DependentRepo::new(pool);
    let ann = repo
        .create(item.id, &new_dependent("Ann Roth", "WRITER"))
        .await
        .unwrap();

    let removed = repo.delete(item.id, ann.id).await.unwrap();
    assert_eq!(removed.id, ann.id);
    assert!(repo.list_by_item(item.id).await.unwrap().is_empty());

    assert_matches!(
        repo.delete(item.id, ann.id).await,
        Err(DbError::Core(CoreError::NotFound { entity: "Dependent", .. }))
    );
}

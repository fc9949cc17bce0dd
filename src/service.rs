//! Entry persistence against SQLite.

use crate::entry::{Entry, EntrySummary};
use crate::error::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct EntryService;

impl EntryService {
    /// Insert one row. `created_at` is assigned here, never by the caller.
    /// Returns the new row id.
    pub async fn insert(
        pool: &SqlitePool,
        name: &str,
        number: Option<i64>,
    ) -> Result<i64, AppError> {
        let created_at = Utc::now();
        tracing::debug!(name = %name, number = ?number, "insert entry");
        let result = sqlx::query("INSERT INTO entries (name, number, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(number)
            .bind(created_at)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// All rows projected to name, number, created_at, in insertion order.
    pub async fn list_summaries(pool: &SqlitePool) -> Result<Vec<EntrySummary>, AppError> {
        let rows = sqlx::query_as::<_, EntrySummary>(
            "SELECT name, number, created_at FROM entries ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// All rows, every column, in insertion order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Entry>, AppError> {
        let rows = sqlx::query_as::<_, Entry>(
            "SELECT id, name, number, created_at FROM entries ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    async fn pool() -> SqlitePool {
        let pool = store::connect("sqlite::memory:").await.unwrap();
        store::ensure_entries_table(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn insert_assigns_id_and_created_at() {
        let pool = pool().await;
        let id = EntryService::insert(&pool, "a", Some(1)).await.unwrap();
        assert_eq!(id, 1);

        let rows = EntryService::list_all(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[0].number, Some(1));
    }

    #[tokio::test]
    async fn insert_without_number_stores_null() {
        let pool = pool().await;
        EntryService::insert(&pool, "only-name", None).await.unwrap();

        let rows = EntryService::list_summaries(&pool).await.unwrap();
        assert_eq!(rows[0].number, None);
    }

    #[tokio::test]
    async fn listings_preserve_insertion_order() {
        let pool = pool().await;
        EntryService::insert(&pool, "first", Some(1)).await.unwrap();
        EntryService::insert(&pool, "second", Some(2)).await.unwrap();

        let rows = EntryService::list_summaries(&pool).await.unwrap();
        assert_eq!(rows[0].name, "first");
        assert_eq!(rows[1].name, "second");
    }
}

//! Memories: titled, described records with an optional inline photo.

use crate::error::AppError;
use crate::model::{Memory, MemoryInput};
use sqlx::SqlitePool;

pub struct MemoryService;

impl MemoryService {
    /// All memories, newest first. Same-second inserts fall back to id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Memory>, AppError> {
        let rows = sqlx::query_as::<_, Memory>("SELECT * FROM memories ORDER BY created_at DESC, id DESC")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Memory>, AppError> {
        let row = sqlx::query_as::<_, Memory>("SELECT * FROM memories WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert and return the stored row, timestamps included.
    pub async fn create(pool: &SqlitePool, input: &MemoryInput) -> Result<Memory, AppError> {
        let row = sqlx::query_as::<_, Memory>(
            "INSERT INTO memories (title, description, photo_base64) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.photo_base64)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id = row.id, "memory created");
        Ok(row)
    }

    /// Full replace of title, description and photo. Returns rows changed.
    pub async fn update(pool: &SqlitePool, id: i64, input: &MemoryInput) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE memories SET title = ?, description = ?, photo_base64 = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.photo_base64)
        .bind(id)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "memory update matched no row");
        }
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM memories WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "memory delete matched no row");
        }
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::tempdir;

    async fn setup_store() -> (Store, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let store = Store::open(&url, 1).await.unwrap();
        store.initialize().await.unwrap();
        (store, dir)
    }

    fn input(title: &str, description: &str) -> MemoryInput {
        MemoryInput {
            title: title.to_string(),
            description: description.to_string(),
            photo_base64: None,
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let (store, _dir) = setup_store().await;
        let created = MemoryService::create(store.pool(), &input("Trip", "Beach day")).await.unwrap();
        assert!(created.id > 0);
        assert!(created.created_at.is_some());

        let fetched = MemoryService::get(store.pool(), created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.photo_filename, None);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (store, _dir) = setup_store().await;
        let pool = store.pool();
        for i in 0..3 {
            MemoryService::create(pool, &input(&format!("m{}", i), "d")).await.unwrap();
        }
        let titles: Vec<String> = MemoryService::list(pool)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["m2", "m1", "m0"]);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let (store, _dir) = setup_store().await;
        let pool = store.pool();
        let mut first = input("Trip", "Beach day");
        first.photo_base64 = Some("aGVsbG8=".into());
        let created = MemoryService::create(pool, &first).await.unwrap();

        let changed = MemoryService::update(pool, created.id, &input("Hike", "Mountains")).await.unwrap();
        assert_eq!(changed, 1);
        let row = MemoryService::get(pool, created.id).await.unwrap().unwrap();
        assert_eq!(row.title, "Hike");
        assert_eq!(row.description, "Mountains");
        assert_eq!(row.photo_base64, None);
    }

    #[tokio::test]
    async fn delete_missing_id_is_noop() {
        let (store, _dir) = setup_store().await;
        let pool = store.pool();
        MemoryService::create(pool, &input("Trip", "Beach day")).await.unwrap();

        assert_eq!(MemoryService::delete(pool, 9999).await.unwrap(), 0);
        assert_eq!(MemoryService::update(pool, 9999, &input("x", "y")).await.unwrap(), 0);
        assert_eq!(MemoryService::list(pool).await.unwrap().len(), 1);
    }
}

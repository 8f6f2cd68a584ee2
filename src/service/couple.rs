//! Couple data: the singleton settings row.

use crate::error::AppError;
use crate::model::CoupleData;
use sqlx::SqlitePool;

/// Updates address the singleton by its conventional id rather than looking it up.
const COUPLE_ROW_ID: i64 = 1;

pub struct CoupleService;

impl CoupleService {
    /// The singleton row (lowest id), if seeded.
    pub async fn get(pool: &SqlitePool) -> Result<Option<CoupleData>, AppError> {
        let row = sqlx::query_as::<_, CoupleData>("SELECT * FROM couple_data ORDER BY id LIMIT 1")
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Returns the number of rows changed (0 when the singleton is missing).
    pub async fn update_start_date(pool: &SqlitePool, start_date: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE couple_data SET start_date = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(start_date)
        .bind(COUPLE_ROW_ID)
        .execute(pool)
        .await?;
        Ok(log_affected("start_date", result.rows_affected()))
    }

    pub async fn update_home_message(pool: &SqlitePool, home_message: Option<&str>) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE couple_data SET home_message = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(home_message)
        .bind(COUPLE_ROW_ID)
        .execute(pool)
        .await?;
        Ok(log_affected("home_message", result.rows_affected()))
    }

    pub async fn update_intro_text(pool: &SqlitePool, intro_text: Option<&str>) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE couple_data SET intro_text = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(intro_text)
        .bind(COUPLE_ROW_ID)
        .execute(pool)
        .await?;
        Ok(log_affected("intro_text", result.rows_affected()))
    }
}

fn log_affected(field: &str, rows: u64) -> u64 {
    if rows == 0 {
        tracing::debug!(field = %field, "couple data update matched no row");
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Store, DEFAULT_START_DATE};
    use tempfile::tempdir;

    async fn setup_store() -> (Store, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let store = Store::open(&url, 1).await.unwrap();
        store.initialize().await.unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn get_returns_seeded_row() {
        let (store, _dir) = setup_store().await;
        let row = CoupleService::get(store.pool()).await.unwrap().unwrap();
        assert_eq!(row.id, 1);
        assert_eq!(row.start_date, DEFAULT_START_DATE);
        assert!(row.created_at.is_some());
    }

    #[tokio::test]
    async fn updates_each_field() {
        let (store, _dir) = setup_store().await;
        let pool = store.pool();

        assert_eq!(CoupleService::update_start_date(pool, "2024-02-14").await.unwrap(), 1);
        CoupleService::update_home_message(pool, Some("hello")).await.unwrap();
        CoupleService::update_intro_text(pool, None).await.unwrap();

        let row = CoupleService::get(pool).await.unwrap().unwrap();
        assert_eq!(row.start_date, "2024-02-14");
        assert_eq!(row.home_message.as_deref(), Some("hello"));
        assert_eq!(row.intro_text, None);
    }

    #[tokio::test]
    async fn update_without_row_affects_nothing() {
        let (store, _dir) = setup_store().await;
        let pool = store.pool();
        sqlx::query("DELETE FROM couple_data").execute(pool).await.unwrap();

        assert_eq!(CoupleService::update_start_date(pool, "2024-01-01").await.unwrap(), 0);
        assert!(CoupleService::get(pool).await.unwrap().is_none());
    }
}

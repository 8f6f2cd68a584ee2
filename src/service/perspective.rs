//! Perspectives: numbered free-text entries, one row per number.

use crate::error::AppError;
use crate::model::{Perspective, UpsertOutcome};
use sqlx::SqlitePool;

pub struct PerspectiveService;

impl PerspectiveService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Perspective>, AppError> {
        let rows = sqlx::query_as::<_, Perspective>("SELECT * FROM perspectives ORDER BY perspective_number")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, number: i64) -> Result<Option<Perspective>, AppError> {
        let row = sqlx::query_as::<_, Perspective>("SELECT * FROM perspectives WHERE perspective_number = ?")
            .bind(number)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert the number if absent, otherwise rewrite its content.
    /// The conditional insert decides atomically which case applies, so
    /// concurrent upserts of one number never produce a second row.
    pub async fn upsert(pool: &SqlitePool, number: i64, content: &str) -> Result<UpsertOutcome, AppError> {
        let inserted = sqlx::query(
            "INSERT INTO perspectives (perspective_number, content) VALUES (?, ?) ON CONFLICT(perspective_number) DO NOTHING",
        )
        .bind(number)
        .bind(content)
        .execute(pool)
        .await?;
        if inserted.rows_affected() > 0 {
            tracing::debug!(number, "perspective created");
            return Ok(UpsertOutcome::Created);
        }
        Self::update_content(pool, number, content).await?;
        Ok(UpsertOutcome::Updated)
    }

    /// Unconditional update; returns rows changed (0 when the number was never created).
    pub async fn update_content(pool: &SqlitePool, number: i64, content: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE perspectives SET content = ?, updated_at = CURRENT_TIMESTAMP WHERE perspective_number = ?",
        )
        .bind(content)
        .bind(number)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(number, "perspective update matched no row");
        }
        Ok(result.rows_affected())
    }
}

//! SQLite store handle: open, table DDL, and default couple data seeding.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_START_DATE: &str = "2023-11-10";
pub const DEFAULT_HOME_MESSAGE: &str = "Default home message";
pub const DEFAULT_INTRO_TEXT: &str = "Default intro text";

const TABLES: &[(&str, &str)] = &[
    (
        "couple_data",
        r#"
        CREATE TABLE IF NOT EXISTS couple_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            start_date TEXT NOT NULL,
            home_message TEXT,
            intro_text TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "memories",
        r#"
        CREATE TABLE IF NOT EXISTS memories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            photo_filename TEXT,
            photo_base64 TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "perspectives",
        r#"
        CREATE TABLE IF NOT EXISTS perspectives (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            perspective_number INTEGER NOT NULL,
            content TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(perspective_number)
        )
        "#,
    ),
];

/// Owned handle to the embedded database. Opened once at startup, cloned into
/// request state, closed after the server stops.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating the file if absent) a pooled SQLite connection.
    /// In-memory URLs are pinned to one connection so every query sees the same database.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        let in_memory = database_url.contains(":memory:");
        let pool_opts = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };
        let pool = pool_opts.connect_with(opts).await?;
        tracing::info!(database_url = %database_url, "opened sqlite store");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables if missing, then seed the couple data row when the table is empty.
    /// Must complete before requests are served; the emptiness check is not guarded.
    pub async fn initialize(&self) -> Result<(), AppError> {
        ensure_tables(&self.pool).await?;
        seed_couple_data(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("sqlite store closed");
    }
}

pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Insert the default couple data row if none exists. Returns true when a row was inserted.
pub async fn seed_couple_data(pool: &SqlitePool) -> Result<bool, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM couple_data")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }
    sqlx::query("INSERT INTO couple_data (start_date, home_message, intro_text) VALUES (?, ?, ?)")
        .bind(DEFAULT_START_DATE)
        .bind(DEFAULT_HOME_MESSAGE)
        .bind(DEFAULT_INTRO_TEXT)
        .execute(pool)
        .await?;
    tracing::info!("seeded default couple data");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn url_for(dir: &tempfile::TempDir) -> String {
        format!("sqlite://{}", dir.path().join("test.db").display())
    }

    #[tokio::test]
    async fn initialize_creates_single_default_row() {
        let dir = tempdir().unwrap();
        let store = Store::open(&url_for(&dir), 2).await.unwrap();
        store.initialize().await.unwrap();

        let rows: Vec<(i64, String, Option<String>, Option<String>)> =
            sqlx::query_as("SELECT id, start_date, home_message, intro_text FROM couple_data")
                .fetch_all(store.pool())
                .await
                .unwrap();
        assert_eq!(rows.len(), 1);
        let (id, start_date, home, intro) = &rows[0];
        assert_eq!(*id, 1);
        assert_eq!(start_date, DEFAULT_START_DATE);
        assert_eq!(home.as_deref(), Some(DEFAULT_HOME_MESSAGE));
        assert_eq!(intro.as_deref(), Some(DEFAULT_INTRO_TEXT));
        store.close().await;
    }

    #[tokio::test]
    async fn reopening_does_not_seed_twice() {
        let dir = tempdir().unwrap();
        let url = url_for(&dir);

        let store = Store::open(&url, 1).await.unwrap();
        store.initialize().await.unwrap();
        store.close().await;

        let store = Store::open(&url, 1).await.unwrap();
        store.initialize().await.unwrap();
        assert!(!seed_couple_data(store.pool()).await.unwrap());
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM couple_data")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
        store.close().await;
    }

    #[tokio::test]
    async fn invalid_url_is_a_store_error() {
        let err = Store::open("sqlite://journal.db?mode=bogus", 1).await.unwrap_err();
        assert!(matches!(err, AppError::Db(sqlx::Error::Configuration(_))));
    }

    #[tokio::test]
    async fn in_memory_store_shares_one_database() {
        let store = Store::open("sqlite::memory:", 8).await.unwrap();
        store.initialize().await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM couple_data")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}

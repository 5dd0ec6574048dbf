//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use person_types::Person;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tracing::info!("Creating parent directory: {}", parent.display());
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, creating schema...");

        Self::create_schema(&pool)
            .await
            .context("Failed to create database schema")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Private in-memory database, used by tests and throwaway runs.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new().filename(":memory:");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::create_schema(&pool)
            .await
            .context("Failed to create database schema")?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn create_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS individuos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn ping(&self) -> sqlx::Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    // Person operations
    pub async fn list_persons(&self) -> sqlx::Result<Vec<Person>> {
        let rows: Vec<PersonRow> = sqlx::query_as(
            r#"
            SELECT id, nome FROM individuos
            ORDER BY id
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_person(&self, id: i64) -> sqlx::Result<Option<Person>> {
        let row: Option<PersonRow> = sqlx::query_as(
            r#"
            SELECT id, nome FROM individuos WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    /// Inserts a person and returns the id assigned by SQLite.
    pub async fn insert_person(&self, name: &str) -> sqlx::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO individuos (nome) VALUES (?1)
            "#,
        )
        .bind(name)
        .execute(&*self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Renames a person, returning the number of rows touched (0 or 1).
    pub async fn update_person_name(&self, id: i64, name: &str) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE individuos SET nome = ?1 WHERE id = ?2
            "#,
        )
        .bind(name)
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_person(&self, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM individuos WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i64,
    nome: String,
}

impl From<PersonRow> for Person {
    fn from(r: PersonRow) -> Self {
        Person {
            id: r.id,
            name: r.nome,
        }
    }
}

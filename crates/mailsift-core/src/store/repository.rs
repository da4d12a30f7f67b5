//! Message storage repository.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::model::CachedMessage;
use crate::Result;

/// Repository for cached message storage and retrieval.
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                message_id TEXT NOT NULL UNIQUE,
                from_addr TEXT NOT NULL DEFAULT '',
                to_addr TEXT NOT NULL DEFAULT '',
                subject TEXT,
                snippet TEXT,
                date TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_messages_message_id
            ON messages(message_id)
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a batch of messages in a single transaction.
    ///
    /// Existing rows with the same `message_id` are updated in place. If any
    /// write fails the whole batch rolls back, so readers never observe a
    /// partially written sync.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn store_messages(&self, messages: &[CachedMessage]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for message in messages {
            sqlx::query(
                r"
                INSERT INTO messages
                    (message_id, from_addr, to_addr, subject, snippet, date)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(message_id) DO UPDATE SET
                    from_addr = excluded.from_addr,
                    to_addr = excluded.to_addr,
                    subject = excluded.subject,
                    snippet = excluded.snippet,
                    date = excluded.date
                ",
            )
            .bind(&message.message_id)
            .bind(&message.from_addr)
            .bind(&message.to_addr)
            .bind(&message.subject)
            .bind(&message.snippet)
            .bind(message.date.map(|d| d.to_rfc3339()))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Get all cached messages in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all(&self) -> Result<Vec<CachedMessage>> {
        let rows = sqlx::query(
            r"
            SELECT message_id, from_addr, to_addr, subject, snippet, date
            FROM messages
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let messages = rows
            .iter()
            .map(|row| {
                let date = row
                    .get::<Option<String>, _>("date")
                    .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
                    .map(|dt| dt.with_timezone(&Utc));

                CachedMessage {
                    message_id: row.get("message_id"),
                    from_addr: row.get("from_addr"),
                    to_addr: row.get("to_addr"),
                    subject: row.get("subject"),
                    snippet: row.get("snippet"),
                    date,
                }
            })
            .collect();

        Ok(messages)
    }

    /// Number of cached messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query(r"SELECT COUNT(*) as count FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    /// Remove all cached messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn clear(&self) -> Result<()> {
        sqlx::query(r"DELETE FROM messages")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

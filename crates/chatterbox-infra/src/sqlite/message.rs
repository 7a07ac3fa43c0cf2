//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `chatterbox-core` using sqlx with
//! split read/write pools. Ids come from SQLite's autoincrement rowid, so
//! they are monotonically increasing; timestamps are stored as RFC 3339
//! text. Concurrent access is serialized by the single-connection writer
//! pool -- no additional locking here.

use chatterbox_core::repository::message::MessageRepository;
use chatterbox_types::error::RepositoryError;
use chatterbox_types::message::Message;
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row type
// ---------------------------------------------------------------------------

struct MessageRow {
    id: i64,
    text: String,
    created_at: String,
    updated_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            text: row.try_get("text")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        Ok(Message {
            id: self.id,
            text: self.text,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// MessageRepository impl
// ---------------------------------------------------------------------------

impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, text: &str) -> Result<Message, RepositoryError> {
        let now = Utc::now();
        let stamp = format_datetime(&now);

        let result =
            sqlx::query("INSERT INTO messages (text, created_at, updated_at) VALUES (?, ?, ?)")
                .bind(text)
                .bind(&stamp)
                .bind(&stamp)
                .execute(&self.pool.writer)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Message {
            id: result.last_insert_rowid(),
            text: text.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Message>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let r = MessageRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(r.into_message()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM messages ORDER BY id ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut msgs = Vec::with_capacity(rows.len());
        for row in &rows {
            let r =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            msgs.push(r.into_message()?);
        }
        Ok(msgs)
    }

    async fn update(&self, id: i64, text: &str) -> Result<Option<Message>, RepositoryError> {
        let stamp = format_datetime(&Utc::now());

        let result = sqlx::query("UPDATE messages SET text = ?, updated_at = ? WHERE id = ?")
            .bind(text)
            .bind(&stamp)
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        // Re-read so created_at comes back from the stored row.
        self.get(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! SQLite session repository implementation.
//!
//! Implements `SessionRepository` from `supportdesk-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, reads on the reader
//! pool and inserts on the single-connection writer.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteConnection;
use sqlx::Row;
use supportdesk_core::chat::repository::SessionRepository;
use supportdesk_types::chat::{Message, MessageRole, Session};
use supportdesk_types::error::RepositoryError;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SessionRepository`.
pub struct SqliteSessionRepository {
    pool: DatabasePool,
}

impl SqliteSessionRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct SessionRow {
    id: String,
    created_at: String,
}

impl SessionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_session(self) -> Result<Session, RepositoryError> {
        Ok(Session {
            id: self.id,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

struct MessageRow {
    id: i64,
    session_id: String,
    role: String,
    content: String,
    timestamp: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(Message {
            id: self.id,
            session_id: self.session_id,
            role,
            content: self.content,
            timestamp: parse_datetime(&self.timestamp)?,
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

/// Fixed-width RFC 3339 so lexical order in SQLite equals time order.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

async fn session_exists(
    conn: &mut SqliteConnection,
    session_id: &str,
) -> Result<bool, RepositoryError> {
    let row = sqlx::query("SELECT 1 FROM sessions WHERE id = ?")
        .bind(session_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    Ok(row.is_some())
}

async fn insert_message(
    conn: &mut SqliteConnection,
    session_id: &str,
    role: MessageRole,
    content: &str,
) -> Result<Message, RepositoryError> {
    let timestamp = Utc::now();
    let result = sqlx::query(
        "INSERT INTO messages (session_id, role, content, timestamp) VALUES (?, ?, ?, ?)",
    )
    .bind(session_id)
    .bind(role.to_string())
    .bind(content)
    .bind(format_datetime(&timestamp))
    .execute(&mut *conn)
    .await
    .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(Message {
        id: result.last_insert_rowid(),
        session_id: session_id.to_string(),
        role,
        content: content.to_string(),
        timestamp,
    })
}

// ---------------------------------------------------------------------------
// SessionRepository implementation
// ---------------------------------------------------------------------------

impl SessionRepository for SqliteSessionRepository {
    async fn create_session(&self) -> Result<Session, RepositoryError> {
        let session = Session {
            id: Uuid::now_v7().to_string(),
            created_at: Utc::now(),
        };

        sqlx::query("INSERT INTO sessions (id, created_at) VALUES (?, ?)")
            .bind(&session.id)
            .bind(format_datetime(&session.created_at))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(session)
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<Session>, RepositoryError> {
        let row = sqlx::query("SELECT id, created_at FROM sessions WHERE id = ?")
            .bind(session_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let session_row = SessionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(session_row.into_session()?))
            }
            None => Ok(None),
        }
    }

    async fn append_message(
        &self,
        session_id: &str,
        role: MessageRole,
        content: &str,
    ) -> Result<Message, RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if !session_exists(&mut tx, session_id).await? {
            return Err(RepositoryError::NotFound);
        }
        let message = insert_message(&mut tx, session_id, role, content).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(message)
    }

    async fn append_exchange(
        &self,
        session_id: &str,
        user_content: &str,
        bot_content: &str,
    ) -> Result<(Message, Message), RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if !session_exists(&mut tx, session_id).await? {
            return Err(RepositoryError::NotFound);
        }
        let user = insert_message(&mut tx, session_id, MessageRole::User, user_content).await?;
        let bot = insert_message(&mut tx, session_id, MessageRole::Bot, bot_content).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok((user, bot))
    }

    async fn list_messages(&self, session_id: &str) -> Result<Vec<Message>, RepositoryError> {
        if self.get_session(session_id).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let rows = sqlx::query(
            "SELECT id, session_id, role, content, timestamp FROM messages WHERE session_id = ? ORDER BY timestamp ASC, id ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::{database_url_for, DatabasePool};

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(dir.path());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_session() {
        let repo = SqliteSessionRepository::new(test_pool().await);

        let created = repo.create_session().await.unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());

        let found = repo.get_session(&created.id).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(
            format_datetime(&found.created_at),
            format_datetime(&created.created_at)
        );
    }

    #[tokio::test]
    async fn test_session_ids_are_unique() {
        let repo = SqliteSessionRepository::new(test_pool().await);
        let a = repo.create_session().await.unwrap();
        let b = repo.create_session().await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_none() {
        let repo = SqliteSessionRepository::new(test_pool().await);
        assert!(repo.get_session("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_and_list_messages() {
        let repo = SqliteSessionRepository::new(test_pool().await);
        let session = repo.create_session().await.unwrap();

        let first = repo
            .append_message(&session.id, MessageRole::User, "Hello")
            .await
            .unwrap();
        let second = repo
            .append_message(&session.id, MessageRole::Bot, "Hi there!")
            .await
            .unwrap();
        assert!(second.id > first.id);

        let messages = repo.list_messages(&session.id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].content, "Hello");
        assert_eq!(messages[1].role, MessageRole::Bot);
        assert_eq!(messages[1].id, second.id);
    }

    #[tokio::test]
    async fn test_append_exchange_orders_user_before_bot() {
        let repo = SqliteSessionRepository::new(test_pool().await);
        let session = repo.create_session().await.unwrap();

        repo.append_exchange(&session.id, "q1", "a1").await.unwrap();
        repo.append_exchange(&session.id, "q2", "a2").await.unwrap();

        let messages = repo.list_messages(&session.id).await.unwrap();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q1", "a1", "q2", "a2"]);
        let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::User, MessageRole::Bot, MessageRole::User, MessageRole::Bot]
        );
    }

    #[tokio::test]
    async fn test_append_to_unknown_session_is_not_found() {
        let repo = SqliteSessionRepository::new(test_pool().await);

        let err = repo
            .append_message("missing", MessageRole::User, "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));

        let err = repo.append_exchange("missing", "q", "a").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&repo.pool.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn test_list_unknown_session_is_not_found() {
        let repo = SqliteSessionRepository::new(test_pool().await);
        let err = repo.list_messages("missing").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_messages_scoped_to_session() {
        let repo = SqliteSessionRepository::new(test_pool().await);
        let a = repo.create_session().await.unwrap();
        let b = repo.create_session().await.unwrap();

        repo.append_exchange(&a.id, "for a", "reply a").await.unwrap();

        assert_eq!(repo.list_messages(&a.id).await.unwrap().len(), 2);
        assert!(repo.list_messages(&b.id).await.unwrap().is_empty());
    }

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let a = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2025-01-01T00:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime(&a), "2025-01-01T00:00:00.000000Z");
        assert!(format_datetime(&a) < format_datetime(&b));
    }
}

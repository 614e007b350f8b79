//! SessionRepository trait definition.
//!
//! Provides the append-only persistence operations for sessions and their
//! messages.

use supportdesk_types::chat::{Message, MessageRole, Session};
use supportdesk_types::error::RepositoryError;

/// Repository trait for session and message persistence.
///
/// Implementations live in supportdesk-infra (e.g., `SqliteSessionRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SessionRepository: Send + Sync {
    /// Create and persist a new session with a fresh unique id.
    fn create_session(
        &self,
    ) -> impl std::future::Future<Output = Result<Session, RepositoryError>> + Send;

    /// Get a session by its id.
    fn get_session(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Session>, RepositoryError>> + Send;

    /// Append one message to a session.
    ///
    /// Returns `RepositoryError::NotFound` when the session does not exist.
    fn append_message(
        &self,
        session_id: &str,
        role: MessageRole,
        content: &str,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Append a user message followed by a bot message in one transaction.
    ///
    /// Returns `RepositoryError::NotFound` when the session does not exist,
    /// in which case neither row is written.
    fn append_exchange(
        &self,
        session_id: &str,
        user_content: &str,
        bot_content: &str,
    ) -> impl std::future::Future<Output = Result<(Message, Message), RepositoryError>> + Send;

    /// List all messages of a session, ordered by timestamp ASC.
    ///
    /// Returns `RepositoryError::NotFound` when the session does not exist.
    fn list_messages(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}

//! Support service orchestrating one customer exchange.
//!
//! SupportService coordinates the SessionRepository and CompletionProvider:
//! checking the session, assembling the prompt from FAQ and history, calling
//! the provider, classifying escalation, and persisting the exchange.

use supportdesk_types::chat::{Message, Session};
use supportdesk_types::error::{CompletionError, RepositoryError};
use supportdesk_types::support::{AskOutcome, Verbosity};
use tracing::{debug, info, warn};

use crate::chat::repository::SessionRepository;
use crate::llm::provider::CompletionProvider;
use crate::support::escalation::EscalationClassifier;
use crate::support::faq::FaqStore;
use crate::support::prompt::PromptBuilder;

/// Reply substituted whenever the completion provider fails.
pub const FALLBACK_RESPONSE: &str = "I apologize, but I'm experiencing technical difficulties. \
                                     Let me connect you with a senior support agent.";

/// Orchestrates session lifecycle and question answering.
///
/// Generic over `SessionRepository` and `CompletionProvider` to maintain
/// clean architecture (supportdesk-core never depends on supportdesk-infra).
pub struct SupportService<R: SessionRepository, P: CompletionProvider> {
    repo: R,
    provider: P,
    faqs: FaqStore,
}

impl<R: SessionRepository, P: CompletionProvider> SupportService<R, P> {
    /// Create a new support service.
    pub fn new(repo: R, provider: P, faqs: FaqStore) -> Self {
        Self {
            repo,
            provider,
            faqs,
        }
    }

    /// Access the session repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// The FAQ knowledge base loaded at startup.
    pub fn faqs(&self) -> &FaqStore {
        &self.faqs
    }

    // --- Session lifecycle ---

    /// Create and persist a new session.
    pub async fn create_session(&self) -> Result<Session, RepositoryError> {
        let session = self.repo.create_session().await?;
        info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    /// Ordered history of a session.
    ///
    /// Returns `RepositoryError::NotFound` for an unknown session.
    pub async fn history(&self, session_id: &str) -> Result<Vec<Message>, RepositoryError> {
        self.require_session(session_id).await?;
        self.repo.list_messages(session_id).await
    }

    // --- Question answering ---

    /// Answer one customer question within a session.
    ///
    /// Provider failures never surface as errors: they are replaced by
    /// [`FALLBACK_RESPONSE`] with `escalated = true`. Only storage failures
    /// and unknown sessions are returned as `Err`; an unknown session writes
    /// nothing.
    pub async fn ask(
        &self,
        session_id: &str,
        query: &str,
        verbosity: Verbosity,
    ) -> Result<AskOutcome, RepositoryError> {
        self.require_session(session_id).await?;

        let history = self.repo.list_messages(session_id).await?;
        let prompt = PromptBuilder::build(verbosity, self.faqs.entries(), &history, query);
        debug!(
            session_id,
            history_len = history.len(),
            prompt_chars = prompt.len(),
            provider = self.provider.name(),
            "Prompt assembled"
        );

        let outcome = match self.provider.complete(&prompt).await {
            Ok(reply) if !reply.trim().is_empty() => AskOutcome {
                escalated: EscalationClassifier::should_escalate(query, &reply),
                response: reply,
            },
            Ok(_) => fallback(session_id, &CompletionError::EmptyCandidate),
            Err(err) => fallback(session_id, &err),
        };

        self.repo
            .append_exchange(session_id, query, &outcome.response)
            .await?;

        info!(session_id, escalated = outcome.escalated, "Question answered");
        Ok(outcome)
    }

    async fn require_session(&self, session_id: &str) -> Result<Session, RepositoryError> {
        self.repo
            .get_session(session_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

fn fallback(session_id: &str, err: &CompletionError) -> AskOutcome {
    warn!(session_id, error = %err, "Completion failed, answering with fallback");
    AskOutcome {
        response: FALLBACK_RESPONSE.to_string(),
        escalated: true,
    }
}

//! CompletionProvider trait definition.
//!
//! This is the single abstraction every text-generation backend implements.
//! Uses RPITIT for `complete`; `BoxCompletionProvider` wraps it for dynamic
//! dispatch.

use supportdesk_types::error::CompletionError;

/// Trait for hosted text-generation backends (Gemini, test doubles).
///
/// Implementations live in supportdesk-infra (e.g., `GeminiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one fully assembled prompt and return the first candidate's text.
    ///
    /// Implementations make exactly one outbound call and never retry.
    /// A blank candidate is reported as [`CompletionError::EmptyCandidate`].
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}

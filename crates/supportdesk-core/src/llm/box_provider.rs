//! BoxCompletionProvider -- object-safe dynamic dispatch wrapper for CompletionProvider.
//!
//! 1. Define an object-safe `CompletionProviderDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionProviderDyn` for all `T: CompletionProvider`
//! 3. `BoxCompletionProvider` wraps `Box<dyn CompletionProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use supportdesk_types::error::CompletionError;

use super::provider::CompletionProvider;

/// Object-safe version of [`CompletionProvider`] with boxed futures.
pub trait CompletionProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>>;
}

impl<T: CompletionProvider> CompletionProviderDyn for T {
    fn name(&self) -> &str {
        CompletionProvider::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Type-erased completion provider.
///
/// Lets the application state pin a single concrete service type while the
/// binary wires Gemini and the tests wire stubs.
pub struct BoxCompletionProvider {
    inner: Box<dyn CompletionProviderDyn + Send + Sync>,
}

impl BoxCompletionProvider {
    /// Wrap a concrete `CompletionProvider` in a type-erased box.
    pub fn new<T: CompletionProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }
}

impl CompletionProvider for BoxCompletionProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.inner.complete_boxed(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    impl CompletionProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            Ok(format!("echo: {prompt}"))
        }
    }

    #[tokio::test]
    async fn test_box_provider_delegates() {
        let provider = BoxCompletionProvider::new(EchoProvider);
        assert_eq!(CompletionProvider::name(&provider), "echo");
        let reply = provider.complete("hi").await.unwrap();
        assert_eq!(reply, "echo: hi");
    }

    /// Accepts any `CompletionProvider`, the way `SupportService` does.
    async fn complete_via_trait<P: CompletionProvider>(provider: &P, prompt: &str) -> String {
        provider.complete(prompt).await.unwrap()
    }

    #[tokio::test]
    async fn test_box_provider_usable_as_generic_provider() {
        let provider = BoxCompletionProvider::new(EchoProvider);
        assert_eq!(complete_via_trait(&provider, "ping").await, "echo: ping");
    }
}

//! Application state wiring the support service together.
//!
//! `SupportService` is generic over the repository and provider traits;
//! AppState pins it to the SQLite repository and a boxed provider so tests
//! can substitute their own completion backend.

use std::sync::Arc;

use secrecy::SecretString;

use supportdesk_core::chat::service::SupportService;
use supportdesk_core::llm::box_provider::BoxCompletionProvider;
use supportdesk_core::support::faq::FaqStore;
use supportdesk_infra::config::database_parent_dir;
use supportdesk_infra::faq::load_faqs;
use supportdesk_infra::llm::gemini::GeminiProvider;
use supportdesk_infra::sqlite::pool::DatabasePool;
use supportdesk_infra::sqlite::session::SqliteSessionRepository;
use supportdesk_types::config::ServerConfig;

/// Concrete service type pinned to infra implementations.
pub type ConcreteSupportService = SupportService<SqliteSessionRepository, BoxCompletionProvider>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub support_service: Arc<ConcreteSupportService>,
}

impl AppState {
    /// Wrap an already-wired service.
    pub fn new(support_service: ConcreteSupportService) -> Self {
        Self {
            support_service: Arc::new(support_service),
        }
    }

    /// Initialize the application state: load FAQs, connect to the DB,
    /// build the Gemini provider.
    pub async fn init(api_key: SecretString, config: &ServerConfig) -> anyhow::Result<Self> {
        let faqs = load_faqs(&config.faq_path).await?;

        if let Some(dir) = database_parent_dir(&config.database_url) {
            tokio::fs::create_dir_all(&dir).await?;
        }
        let db_pool = DatabasePool::new(&config.database_url).await?;

        let provider = GeminiProvider::new(api_key, &config.provider)?;
        tracing::info!(
            model = provider.model(),
            faqs = faqs.len(),
            "Support service initialized"
        );

        let service = SupportService::new(
            SqliteSessionRepository::new(db_pool),
            BoxCompletionProvider::new(provider),
            FaqStore::new(faqs),
        );

        Ok(Self::new(service))
    }
}

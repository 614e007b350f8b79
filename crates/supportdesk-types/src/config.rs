//! Startup configuration types for Supportdesk.
//!
//! `ServerConfig` is assembled once from the environment before the server
//! binds and is shared read-only afterwards.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default Gemini model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API origin when `GEMINI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default FAQ file path when `SUPPORTDESK_FAQ_PATH` is unset.
pub const DEFAULT_FAQ_PATH: &str = "faqs.json";

/// Outbound completion timeout in seconds.
pub const COMPLETION_TIMEOUT_SECS: u64 = 30;

/// Provider connection settings.
///
/// The API key is deliberately not part of this struct; it travels as a
/// `SecretString` straight into the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: COMPLETION_TIMEOUT_SECS,
        }
    }
}

/// Everything the server needs besides the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub provider: ProviderConfig,
    pub faq_path: PathBuf,
    pub database_url: String,
}

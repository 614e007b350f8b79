//! Environment configuration loader for Supportdesk.
//!
//! Reads provider settings, the FAQ path, and the database location from the
//! process environment. The API key is the only required value; everything
//! else falls back to defaults.

use std::path::PathBuf;

use secrecy::SecretString;

use supportdesk_types::config::{
    ProviderConfig, ServerConfig, COMPLETION_TIMEOUT_SECS, DEFAULT_BASE_URL, DEFAULT_FAQ_PATH,
    DEFAULT_MODEL,
};
use supportdesk_types::error::ConfigError;

use crate::sqlite::pool::database_url_for;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_FAQ_PATH: &str = "SUPPORTDESK_FAQ_PATH";
pub const ENV_DATA_DIR: &str = "SUPPORTDESK_DATA_DIR";
pub const ENV_DATABASE_URL: &str = "SUPPORTDESK_DATABASE_URL";

/// Load configuration from the process environment.
pub fn load_from_env() -> Result<(SecretString, ServerConfig), ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Blank values are treated as unset. A missing or blank API key is
/// [`ConfigError::MissingApiKey`].
pub fn load_with<F>(lookup: F) -> Result<(SecretString, ServerConfig), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;

    let base_url = get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            key: ENV_BASE_URL.to_string(),
            message: format!("expected an http(s) URL, got '{base_url}'"),
        });
    }

    let provider = ProviderConfig {
        model: get(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        base_url,
        timeout_secs: COMPLETION_TIMEOUT_SECS,
    };

    let faq_path = get(ENV_FAQ_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FAQ_PATH));

    let database_url = match get(ENV_DATABASE_URL) {
        Some(url) => {
            validate_database_url(&url)?;
            url
        }
        None => {
            let data_dir = get(ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir);
            database_url_for(&data_dir)
        }
    };

    Ok((
        SecretString::from(api_key),
        ServerConfig {
            provider,
            faq_path,
            database_url,
        },
    ))
}

/// Default data directory: `~/.supportdesk`, or `.supportdesk` without a home.
pub fn default_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".supportdesk"),
        None => PathBuf::from(".supportdesk"),
    }
}

/// The database must be a SQLite file: the reader and writer pools open
/// separate connections, and each in-memory connection is its own database.
fn validate_database_url(url: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        key: ENV_DATABASE_URL.to_string(),
        message: format!("{message}, got '{url}'"),
    };

    if !url.starts_with("sqlite:") {
        return Err(invalid("expected a sqlite: URL"));
    }
    if url.contains(":memory:") || url.contains("mode=memory") {
        return Err(invalid("in-memory databases are not supported"));
    }
    Ok(())
}

/// Directory that must exist before SQLite can create the database file.
///
/// Returns `None` for URLs that do not point at a plain file path.
pub fn database_parent_dir(database_url: &str) -> Option<PathBuf> {
    let path = database_url.strip_prefix("sqlite://")?;
    let path = path.split('?').next()?;
    if path.is_empty() {
        return None;
    }
    PathBuf::from(path).parent().map(PathBuf::from)
}

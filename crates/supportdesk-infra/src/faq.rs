//! FAQ knowledge base loader.
//!
//! Reads a JSON array of `{question, answer}` objects once at startup.
//! A missing file yields an empty knowledge base; a present but malformed
//! file is an error so a typo never silently empties the prompt context.

use std::path::Path;

use supportdesk_types::error::FaqError;
use supportdesk_types::faq::FaqEntry;

/// Load FAQ entries from `path`.
pub async fn load_faqs(path: &Path) -> Result<Vec<FaqEntry>, FaqError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                "No FAQ file found at {}, starting with an empty knowledge base",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(FaqError::Io(format!("{}: {err}", path.display()))),
    };

    let faqs: Vec<FaqEntry> = serde_json::from_str(&content)
        .map_err(|e| FaqError::Parse(format!("{}: {e}", path.display())))?;

    tracing::info!(count = faqs.len(), path = %path.display(), "FAQ knowledge base loaded");
    Ok(faqs)
}

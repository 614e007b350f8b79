//! POST /ask -- answer one customer question within a session.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use supportdesk_types::support::{AskOutcome, Verbosity};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub session_id: String,
    pub query: String,
    #[serde(default = "default_concise")]
    pub concise: bool,
}

fn default_concise() -> bool {
    true
}

/// POST /ask
///
/// Every query on a known session is forwarded, blank ones included.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskOutcome>, AppError> {
    let outcome = state
        .support_service
        .ask(&req.session_id, &req.query, Verbosity::from_concise(req.concise))
        .await?;

    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concise_defaults_to_true() {
        let req: AskRequest =
            serde_json::from_str(r#"{"session_id": "s", "query": "hi"}"#).unwrap();
        assert!(req.concise);
    }

    #[test]
    fn concise_can_be_disabled() {
        let req: AskRequest =
            serde_json::from_str(r#"{"session_id": "s", "query": "hi", "concise": false}"#)
                .unwrap();
        assert!(!req.concise);
    }
}

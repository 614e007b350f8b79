//! GET /faqs -- the loaded FAQ knowledge base.

use axum::extract::State;
use axum::Json;

use supportdesk_types::faq::FaqEntry;

use crate::state::AppState;

/// GET /faqs
pub async fn list_faqs(State(state): State<AppState>) -> Json<Vec<FaqEntry>> {
    Json(state.support_service.faqs().entries().to_vec())
}

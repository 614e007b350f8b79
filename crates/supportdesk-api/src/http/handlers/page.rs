//! GET / -- static chat page.

use axum::response::Html;

/// Embedded single-page chat client.
pub const CHAT_HTML: &str = include_str!("../../../assets/chat.html");

/// GET /
pub async fn chat_page() -> Html<&'static str> {
    Html(CHAT_HTML)
}

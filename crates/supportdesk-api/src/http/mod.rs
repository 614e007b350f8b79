//! HTTP API layer for Supportdesk.
//!
//! Axum routes for session creation, asking questions, history retrieval,
//! the FAQ listing, and the static chat page.

pub mod error;
pub mod handlers;
pub mod router;

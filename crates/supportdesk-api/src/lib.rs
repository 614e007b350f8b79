//! Supportdesk HTTP application layer: router, handlers, and state wiring.

pub mod http;
pub mod state;

pub use http::router::build_router;
pub use state::AppState;

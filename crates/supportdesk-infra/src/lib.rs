//! Infrastructure layer for Supportdesk.
//!
//! Contains implementations of the traits defined in `supportdesk-core`:
//! SQLite session storage and the Gemini completion provider, plus the
//! environment config and FAQ file loaders used at startup.

pub mod config;
pub mod faq;
pub mod llm;
pub mod sqlite;

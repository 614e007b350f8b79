//! Business logic and port definitions for Supportdesk.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements, plus the pure support logic: FAQ store,
//! prompt assembly, escalation detection, and the ask flow. It depends only
//! on `supportdesk-types` -- never on `supportdesk-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
pub mod support;

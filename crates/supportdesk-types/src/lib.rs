//! Shared domain types for Supportdesk.
//!
//! This crate contains the core domain types used across the support backend:
//! sessions, messages, FAQ entries, exchange outcomes, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod faq;
pub mod support;

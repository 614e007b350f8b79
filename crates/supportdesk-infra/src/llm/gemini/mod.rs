//! Google Gemini completion provider implementation.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`CompletionProvider`](supportdesk_core::llm::provider::CompletionProvider)
//! trait for the `generateContent` REST endpoint.

pub mod client;
pub mod types;

pub use client::GeminiProvider;

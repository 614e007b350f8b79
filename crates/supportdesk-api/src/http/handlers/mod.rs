//! HTTP request handlers.

pub mod ask;
pub mod faq;
pub mod page;
pub mod session;

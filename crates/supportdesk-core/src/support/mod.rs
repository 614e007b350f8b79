//! Pure support logic: FAQ store, prompt assembly, escalation detection.

pub mod escalation;
pub mod faq;
pub mod prompt;

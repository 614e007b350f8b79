//! Prompt builder for the support assistant.
//!
//! Assembles a single text prompt from a fixed instruction preamble, the FAQ
//! knowledge base, the tail of the conversation, and the new question.
//!
//! Layout:
//! ```text
//!
//! You are a customer support assistant. ...
//! Always answer in a {style} style.
//! ...
//!
//! FAQ Knowledge Base:
//! Q: ...
//! A: ...
//!
//!
//! Previous conversation:
//! User: ...
//! Bot: ...
//!
//! Customer Question: {query}
//!
//! Please respond:
//! ```

use supportdesk_types::chat::Message;
use supportdesk_types::faq::FaqEntry;
use supportdesk_types::support::Verbosity;

/// Number of prior messages rendered into the prompt.
pub const HISTORY_WINDOW: usize = 5;

/// Builds the prompt sent to the completion provider.
pub struct PromptBuilder;

impl PromptBuilder {
    /// System section: instruction preamble plus the FAQ block.
    pub fn system_prompt(verbosity: Verbosity, faqs: &[FaqEntry]) -> String {
        let faq_context = faqs
            .iter()
            .map(|faq| format!("Q: {}\nA: {}\n", faq.question, faq.answer))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\n\
            You are a customer support assistant. Use the FAQ knowledge base as reference but not exclusively.\n\
            Always answer in a {} style.\n\
            Maintain a friendly, professional, and helpful tone.\n\
            Escalate to a human agent only if necessary.\n\
            \n\
            FAQ Knowledge Base:\n\
            {faq_context}\n",
            verbosity.reply_style()
        )
    }

    /// Role-labelled transcript of the last [`HISTORY_WINDOW`] messages.
    ///
    /// Returns an empty string when there is no history.
    pub fn history_context(history: &[Message]) -> String {
        let recent = recent_window(history);
        if recent.is_empty() {
            return String::new();
        }

        let lines = recent
            .iter()
            .map(|msg| format!("{}: {}", msg.role.label(), msg.content))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Previous conversation:\n{lines}\n\n")
    }

    /// Build the complete prompt for one question.
    pub fn build(
        verbosity: Verbosity,
        faqs: &[FaqEntry],
        history: &[Message],
        query: &str,
    ) -> String {
        format!(
            "{}\n{}Customer Question: {query}\n\nPlease respond:",
            Self::system_prompt(verbosity, faqs),
            Self::history_context(history),
        )
    }
}

/// Slice of at most the last [`HISTORY_WINDOW`] messages.
fn recent_window(history: &[Message]) -> &[Message] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}

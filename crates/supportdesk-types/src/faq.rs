//! FAQ knowledge base entries.

use serde::{Deserialize, Serialize};

/// One question/answer pair injected into every prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entry_deserialize_list() {
        let json = r#"[
            {"question": "What are your hours?", "answer": "9am to 5pm, Monday to Friday."},
            {"question": "Do you ship abroad?", "answer": "Yes, to most countries."}
        ]"#;
        let faqs: Vec<FaqEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[1].answer, "Yes, to most countries.");
    }
}

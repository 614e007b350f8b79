//! Read-only FAQ knowledge base shared by every request.

use std::sync::Arc;

use supportdesk_types::faq::FaqEntry;

/// Immutable list of FAQ entries, cheap to clone across handlers.
#[derive(Debug, Clone, Default)]
pub struct FaqStore {
    entries: Arc<[FaqEntry]>,
}

impl FaqStore {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_preserves_order() {
        let store = FaqStore::new(vec![
            FaqEntry {
                question: "a".to_string(),
                answer: "1".to_string(),
            },
            FaqEntry {
                question: "b".to_string(),
                answer: "2".to_string(),
            },
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].question, "a");
        assert_eq!(store.entries()[1].answer, "2");
    }

    #[test]
    fn test_clone_shares_entries() {
        let store = FaqStore::new(vec![FaqEntry {
            question: "q".to_string(),
            answer: "a".to_string(),
        }]);
        let cloned = store.clone();
        assert!(std::ptr::eq(store.entries(), cloned.entries()));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FaqStore::default().is_empty());
    }
}

//! In-memory knowledge base for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::client::KnowledgeBase;
use super::error::LookupError;
use super::types::PageLookup;

#[derive(Debug, Clone)]
enum MockOutcome {
    Page(PageLookup),
    Delayed(Duration, PageLookup),
    NetworkError(String),
    Status(u16),
}

/// Titles not registered read as [`PageLookup::Missing`].
#[derive(Debug, Default)]
pub struct MockKnowledgeBase {
    pages: HashMap<String, MockOutcome>,
    calls: Mutex<Vec<String>>,
}

impl MockKnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, title: &str, summary: &str) -> Self {
        self.with_outcome(
            title,
            MockOutcome::Page(PageLookup::Resolved {
                summary: summary.to_string(),
            }),
        )
    }

    pub fn with_ambiguous(self, title: &str) -> Self {
        self.with_outcome(title, MockOutcome::Page(PageLookup::Ambiguous))
    }

    pub fn with_delayed_page(self, title: &str, delay: Duration, summary: &str) -> Self {
        self.with_outcome(
            title,
            MockOutcome::Delayed(
                delay,
                PageLookup::Resolved {
                    summary: summary.to_string(),
                },
            ),
        )
    }

    pub fn with_network_error(self, title: &str, message: &str) -> Self {
        self.with_outcome(title, MockOutcome::NetworkError(message.to_string()))
    }

    pub fn with_status(self, title: &str, status: u16) -> Self {
        self.with_outcome(title, MockOutcome::Status(status))
    }

    fn with_outcome(mut self, title: &str, outcome: MockOutcome) -> Self {
        self.pages.insert(title.to_string(), outcome);
        self
    }

    /// Titles looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

impl KnowledgeBase for MockKnowledgeBase {
    async fn lookup(&self, title: &str) -> Result<PageLookup, LookupError> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(title.to_string());

        match self.pages.get(title).cloned() {
            None => Ok(PageLookup::Missing),
            Some(MockOutcome::Page(page)) => Ok(page),
            Some(MockOutcome::Delayed(delay, page)) => {
                tokio::time::sleep(delay).await;
                Ok(page)
            }
            Some(MockOutcome::NetworkError(message)) => Err(LookupError::Network(message)),
            Some(MockOutcome::Status(status)) => Err(LookupError::UnexpectedStatus {
                title: title.to_string(),
                status,
            }),
        }
    }
}

use std::future::Future;
use std::pin::Pin;

use topic_api::{SourceError, Topic, TopicDocument, TopicSource};

// ═══════════════════════════════════════════════════════════════
//  MemorySource
// ═══════════════════════════════════════════════════════════════

/// Fixed in-memory topic collection, for tests and fixtures that do not
/// need a file on disk.
///
/// `load` hands out a copy, so callers can never change what the next
/// request sees.
pub struct MemorySource {
    topics: Vec<Topic>,
}

impl MemorySource {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// Parse a `{ "topics": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let doc: TopicDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.topics))
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TopicSource for MemorySource {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Topic>, SourceError>> + Send + '_>> {
        let topics = self.topics.clone();
        Box::pin(async move { Ok(topics) })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

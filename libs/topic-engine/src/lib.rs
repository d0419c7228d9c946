pub mod collate;
pub mod error;

use std::sync::Arc;

use topic_api::{SortKey, Topic, TopicQuery, TopicSource};

pub use collate::compare_names;
pub use error::CatalogError;

// ═══════════════════════════════════════════════════════════════
//  TopicCatalog
// ═══════════════════════════════════════════════════════════════

/// Read-only view over a `TopicSource`.
///
/// Nothing is cached: every `query` loads the collection again, so
/// changes to the backing data show up on the next request.
pub struct TopicCatalog {
    source: Arc<dyn TopicSource>,
}

impl TopicCatalog {
    pub fn new(source: Arc<dyn TopicSource>) -> Self {
        Self { source }
    }

    /// Load the collection, then filter and sort it per `query`.
    pub async fn query(&self, query: &TopicQuery) -> Result<Vec<Topic>, CatalogError> {
        let topics = self.source.load().await.map_err(|error| CatalogError::Source {
            source_name: self.source.describe(),
            error,
        })?;
        let loaded = topics.len();

        let topics = apply(topics, query);
        tracing::debug!(
            loaded,
            returned = topics.len(),
            search = ?query.search.as_ref().map(|s| s.as_str()),
            sort = ?query.sort,
            "topics query"
        );
        Ok(topics)
    }
}

/// Filter then sort an already loaded collection.
///
/// Source order is kept unless a sort is requested; the sort is stable,
/// so topics with equal names stay in source order.
pub fn apply(mut topics: Vec<Topic>, query: &TopicQuery) -> Vec<Topic> {
    if let Some(term) = &query.search {
        topics.retain(|t| term.matches(t.name()));
    }

    if let Some(SortKey::Name) = query.sort {
        topics.sort_by(|a, b| compare_names(a.name(), b.name()));
    }

    topics
}

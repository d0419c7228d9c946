use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use topic_api::{SourceError, Topic, TopicDocument, TopicSource};

use super::config::FileSourceConfig;

// ════════════════════════════════════════════════════════════════
//  JsonFileSource
// ════════════════════════════════════════════════════════════════

/// Reads `{ "topics": [...] }` from a JSON file.
///
/// The file is opened and parsed on every `load`; there is no cache and
/// no file watching.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &FileSourceConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Topic>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::from(e).with_context("read"))?;
        let doc = TopicDocument::from_json_str(&content)
            .map_err(|e| SourceError::from(e).with_context("parse"))?;
        tracing::trace!(path = %self.path.display(), topics = doc.topics.len(), "loaded topics file");
        Ok(doc.topics)
    }
}

impl TopicSource for JsonFileSource {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Topic>, SourceError>> + Send + '_>> {
        Box::pin(self.read())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

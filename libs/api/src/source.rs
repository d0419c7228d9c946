use std::future::Future;
use std::pin::Pin;

use crate::{SourceError, Topic};

// ════════════════════════════════════════════════════════════════
//  TopicSource
// ════════════════════════════════════════════════════════════════

/// Where the topic collection comes from.
///
/// `load` is called once per request and must return the whole
/// collection in source order. Implementations: JSON file
/// (`topic-source-file`), in-memory fixture (`topic-source-memory`).
pub trait TopicSource: Send + Sync {
    /// Load the full collection.
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Topic>, SourceError>> + Send + '_>>;

    /// Short description for logs, e.g. the file path.
    fn describe(&self) -> String;
}

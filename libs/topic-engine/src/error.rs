use topic_api::{ErrorKind, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("load topics from {source_name}: {error}")]
    Source {
        source_name: String,
        #[source]
        error: SourceError,
    },
}

impl CatalogError {
    /// Kind of the underlying source failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Source { error, .. } => error.kind(),
        }
    }
}

//! Shared types of the topic service: the topic model, validated query
//! parameters and the `TopicSource` seam every loader implements.

pub mod error;
pub mod query;
pub mod source;
pub mod topic;

pub use error::{ErrorKind, SourceError};
pub use query::{fold_case, SearchTerm, SortKey, TopicQuery};
pub use source::TopicSource;
pub use topic::{Topic, TopicDocument};

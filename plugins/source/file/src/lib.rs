//! Topic source backed by a JSON file on disk.

mod config;
mod source;

pub use config::FileSourceConfig;
pub use source::JsonFileSource;

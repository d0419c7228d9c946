// ════════════════════════════════════════════════════════════════
//  Configuration
// ════════════════════════════════════════════════════════════════

use std::path::PathBuf;

fn default_path() -> PathBuf {
    PathBuf::from("data/topics.json")
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSourceConfig {
    /// JSON document with a top-level `topics` array.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}

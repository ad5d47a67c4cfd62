//! Records storage trait and implementations

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use topic_tree::NodeRecord;

use crate::error::{Result, SessionError};

/// Where records documents live.
///
/// The session works against this seam so tests can swap the filesystem out.
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Load the records document at `path`
    async fn load(&self, path: &Path) -> Result<NodeRecord>;

    /// Save `document` at `path`, creating parent directories as needed
    async fn save(&self, path: &Path, document: &NodeRecord) -> Result<()>;
}

/// File-based records storage
#[derive(Clone, Default)]
pub struct FileRecordStorage;

impl FileRecordStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordStorage for FileRecordStorage {
    async fn load(&self, path: &Path) -> Result<NodeRecord> {
        if !path.exists() {
            return Err(SessionError::RecordsNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).await?;
        let document: NodeRecord = serde_json::from_str(&contents)?;

        Ok(document)
    }

    async fn save(&self, path: &Path, document: &NodeRecord) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let contents = serde_json::to_string_pretty(document)?;
        fs::write(path, contents).await?;

        Ok(())
    }
}

use std::path::PathBuf;

use thiserror::Error;
use topic_tree::TreeError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed records document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Records file not found: {}", .0.display())]
    RecordsNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, SessionError>;

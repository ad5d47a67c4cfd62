use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Topic node not found: {0}")]
    NodeNotFound(String),

    #[error("Node {child} is not a child of {parent}")]
    NotAChild { child: String, parent: String },

    #[error("The conversation root cannot be deleted")]
    RootDeletion,

    #[error("Duplicate node id in document: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, TreeError>;

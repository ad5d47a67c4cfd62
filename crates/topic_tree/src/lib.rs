//! # Topic Tree
//!
//! The conversation model of the chat client: a tree of labeled topics, each
//! holding an ordered chat log, with a single cursor marking the active topic.
//! Also owns the JSON records document the client saves and loads.

pub mod document;
pub mod error;
pub mod node;
pub mod tree;

// Re-exports
pub use document::NodeRecord;
pub use error::TreeError;
pub use node::{NodeId, TopicNode};
pub use tree::{TopicTree, ROOT_TOPIC};

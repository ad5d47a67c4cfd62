//! On-disk document shape of a conversation.
//!
//! A records document is the root node serialized recursively, no wrapper
//! object around it. The entry log is stored under the legacy field name
//! `chats`, so documents written by earlier versions of the client load
//! unchanged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};
use crate::node::{NodeId, TopicNode};
use crate::tree::TopicTree;

/// One node of a records document.
///
/// Deserialization is deliberately lenient: a missing `id` is regenerated on
/// import, missing `chats`/`children` mean empty, and unknown fields are
/// ignored. Only `topic` is required. Exported records always carry all four
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: Option<NodeId>,
    pub topic: String,
    #[serde(default)]
    pub chats: Vec<String>,
    #[serde(default)]
    pub children: Vec<NodeRecord>,
}

impl NodeRecord {
    fn from_node(node: &TopicNode) -> Self {
        Self {
            id: Some(node.id().to_string()),
            topic: node.topic.clone(),
            chats: node.entries.clone(),
            children: node.children.iter().map(NodeRecord::from_node).collect(),
        }
    }

    fn into_node(self) -> TopicNode {
        let NodeRecord {
            id,
            topic,
            chats,
            children,
        } = self;
        let mut node = match id {
            Some(id) => TopicNode::with_id(id, topic),
            None => TopicNode::new(topic),
        };
        node.entries = chats;
        for child in children {
            node.add_child(child.into_node());
        }
        node
    }
}

impl TopicTree {
    /// Snapshots the whole conversation as a records document.
    pub fn to_document(&self) -> NodeRecord {
        NodeRecord::from_node(self.root())
    }

    /// Rebuilds a conversation from a records document.
    ///
    /// Ids present in the document are kept verbatim; nodes without one get a
    /// fresh id. A document carrying the same id twice is rejected with
    /// [`TreeError::DuplicateId`]. The cursor of the rebuilt conversation is
    /// on the root.
    pub fn from_document(record: NodeRecord) -> Result<TopicTree> {
        let root = record.into_node();
        let mut seen = HashSet::new();
        for node in root.iter() {
            if !seen.insert(node.id()) {
                return Err(TreeError::DuplicateId(node.id().to_string()));
            }
        }
        Ok(TopicTree::with_root(root))
    }
}

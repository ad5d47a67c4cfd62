use crate::error::{Result, TreeError};
use crate::node::{NodeId, TopicNode};

/// Label of the root node of every fresh conversation.
pub const ROOT_TOPIC: &str = "conversation root";

/// A conversation: one root topic plus a cursor marking where new input goes.
///
/// The cursor always names a node reachable from the root; every operation
/// that could orphan it repairs it before returning.
#[derive(Debug, Clone)]
pub struct TopicTree {
    root: TopicNode,
    current: NodeId,
}

impl TopicTree {
    /// Creates a conversation holding only the root topic, with the cursor
    /// on the root.
    pub fn new() -> Self {
        let root = TopicNode::new(ROOT_TOPIC);
        let current = root.id().to_string();
        Self { root, current }
    }

    pub(crate) fn with_root(root: TopicNode) -> Self {
        let current = root.id().to_string();
        Self { root, current }
    }

    pub fn root(&self) -> &TopicNode {
        &self.root
    }

    /// The node the cursor points at.
    pub fn current(&self) -> &TopicNode {
        self.root
            .find(&self.current)
            .expect("cursor always names a reachable node")
    }

    pub fn current_id(&self) -> &str {
        &self.current
    }

    /// Creates a new topic under the current node and moves the cursor onto
    /// it, so the next message lands in the fresh topic.
    pub fn add_topic(&mut self, topic: impl Into<String>) -> NodeId {
        let node = TopicNode::new(topic);
        let id = node.id().to_string();
        let current = self.current.clone();
        self.root
            .find_mut(&current)
            .expect("cursor always names a reachable node")
            .add_child(node);
        self.current = id.clone();
        id
    }

    /// Creates a new topic under an explicit parent without moving the cursor.
    pub fn add_child(&mut self, parent_id: &str, topic: impl Into<String>) -> Result<NodeId> {
        let parent = self
            .root
            .find_mut(parent_id)
            .ok_or_else(|| TreeError::NodeNotFound(parent_id.to_string()))?;
        let node = TopicNode::new(topic);
        let id = node.id().to_string();
        parent.add_child(node);
        Ok(id)
    }

    /// Moves the cursor onto the node with the given id.
    pub fn set_current(&mut self, id: &str) -> Result<()> {
        if self.root.find(id).is_none() {
            return Err(TreeError::NodeNotFound(id.to_string()));
        }
        self.current = id.to_string();
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&TopicNode> {
        self.root.find(id)
    }

    /// The parent of the node with the given id, if it has one. The root has
    /// no parent.
    pub fn parent_of(&self, id: &str) -> Option<&TopicNode> {
        self.root
            .iter()
            .find(|node| node.children.iter().any(|child| child.id() == id))
    }

    /// Replaces the topic label of the node with the given id.
    pub fn rename(&mut self, id: &str, topic: impl Into<String>) -> Result<()> {
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
        node.topic = topic.into();
        Ok(())
    }

    /// Appends a chat entry to the node with the given id.
    pub fn append_entry(&mut self, id: &str, entry: impl Into<String>) -> Result<()> {
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
        node.append_entry(entry);
        Ok(())
    }

    /// Deletes the node with the given id together with its whole subtree and
    /// returns the detached subtree.
    ///
    /// The root is never deletable. When the cursor was inside the deleted
    /// subtree it is moved onto the deleted node's parent, the nearest
    /// surviving ancestor.
    pub fn delete(&mut self, id: &str) -> Result<TopicNode> {
        if id == self.root.id() {
            return Err(TreeError::RootDeletion);
        }
        let parent_id = self
            .parent_of(id)
            .map(|parent| parent.id().to_string())
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
        let removed = self
            .root
            .find_mut(&parent_id)
            .expect("parent was just located by traversal")
            .remove_child(id)?;
        if removed.find(&self.current).is_some() {
            self.current = parent_id;
        }
        Ok(removed)
    }

    /// Renders the whole conversation as an indented outline, root first.
    pub fn render(&self) -> String {
        self.root.render(0)
    }
}

impl Default for TopicTree {
    fn default() -> Self {
        Self::new()
    }
}

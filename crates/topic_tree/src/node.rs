use uuid::Uuid;

use crate::error::{Result, TreeError};

/// Opaque, stable node identifier. Generated ids are UUIDv4 strings, but any
/// unique string loaded from a records document is preserved verbatim.
pub type NodeId = String;

/// A single labeled topic in the conversation tree.
///
/// Owns its chat entries and its children; child order is the order in which
/// they were attached and is preserved across save/load.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicNode {
    pub(crate) id: NodeId,
    pub topic: String,
    pub entries: Vec<String>,
    pub children: Vec<TopicNode>,
}

impl TopicNode {
    /// Creates a leaf node with a fresh id, no entries and no children.
    pub fn new(topic: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), topic.into())
    }

    pub(crate) fn with_id(id: NodeId, topic: String) -> Self {
        Self {
            id,
            topic,
            entries: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attaches `child` after any existing children.
    ///
    /// The caller must not attach a node that already lives elsewhere in the
    /// same tree; ids are assumed unique tree-wide.
    pub fn add_child(&mut self, child: TopicNode) {
        self.children.push(child);
    }

    /// Detaches and returns the direct child with the given id.
    ///
    /// Fails with [`TreeError::NotAChild`] when `id` does not name a direct
    /// child of this node, including when it names a deeper descendant.
    pub fn remove_child(&mut self, id: &str) -> Result<TopicNode> {
        match self.children.iter().position(|child| child.id == id) {
            Some(index) => Ok(self.children.remove(index)),
            None => Err(TreeError::NotAChild {
                child: id.to_string(),
                parent: self.id.clone(),
            }),
        }
    }

    /// Appends a chat entry to this node's log.
    pub fn append_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Finds the node with the given id in this subtree, this node included.
    pub fn find(&self, id: &str) -> Option<&TopicNode> {
        self.iter().find(|node| node.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut TopicNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter_mut().rev());
        }
        None
    }

    /// Pre-order traversal over this subtree, this node first.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Renders this subtree as an indented outline.
    ///
    /// The node at `depth` 0 is printed bare; every deeper node is printed as
    /// a `- ` bullet indented two spaces per level below its topmost ancestor.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, depth)];
        while let Some((node, level)) = stack.pop() {
            if level == 0 {
                out.push_str(&node.topic);
            } else {
                for _ in 1..level {
                    out.push_str("  ");
                }
                out.push_str("- ");
                out.push_str(&node.topic);
            }
            out.push('\n');
            stack.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }
        out
    }
}

/// Iterator returned by [`TopicNode::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a TopicNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TopicNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TopicNode {
        let mut root = TopicNode::new("root");
        let mut a = TopicNode::new("a");
        a.add_child(TopicNode::new("a1"));
        a.add_child(TopicNode::new("a2"));
        root.add_child(a);
        root.add_child(TopicNode::new("b"));
        root
    }

    #[test]
    fn test_new_node_is_empty() {
        let node = TopicNode::new("greetings");
        assert_eq!(node.topic, "greetings");
        assert!(node.entries.is_empty());
        assert!(node.children.is_empty());
        assert!(!node.id().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let first = TopicNode::new("same label");
        let second = TopicNode::new("same label");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_iter_is_preorder() {
        let root = sample();
        let topics: Vec<&str> = root.iter().map(|node| node.topic.as_str()).collect();
        assert_eq!(topics, ["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_find_hits_nested_node() {
        let root = sample();
        let target = root.children[0].children[1].id().to_string();
        assert_eq!(root.find(&target).map(|n| n.topic.as_str()), Some("a2"));
        assert!(root.find("no-such-id").is_none());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut root = sample();
        let target = root.children[1].id().to_string();
        root.find_mut(&target)
            .map(|node| node.append_entry("hello"))
            .unwrap();
        assert_eq!(root.children[1].entries, ["hello"]);
    }

    #[test]
    fn test_remove_child_detaches_subtree() {
        let mut root = sample();
        let id = root.children[0].id().to_string();
        let removed = root.remove_child(&id).unwrap();
        assert_eq!(removed.topic, "a");
        assert_eq!(removed.children.len(), 2);
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_remove_child_rejects_non_child() {
        let mut root = sample();
        // a1 is a grandchild, not a direct child of root
        let grandchild = root.children[0].children[0].id().to_string();
        let err = root.remove_child(&grandchild).unwrap_err();
        assert_eq!(
            err,
            TreeError::NotAChild {
                child: grandchild,
                parent: root.id().to_string(),
            }
        );
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_render_indents_by_level() {
        let root = sample();
        assert_eq!(root.render(0), "root\n- a\n  - a1\n  - a2\n- b\n");
    }

    #[test]
    fn test_render_from_nonzero_depth() {
        let root = sample();
        let a = &root.children[0];
        assert_eq!(a.render(1), "- a\n  - a1\n  - a2\n");
    }
}

//! Chat session service

use std::path::{Path, PathBuf};

use log::{info, warn};

use chat_backend::ModelBackend;
use topic_tree::{NodeId, TopicNode, TopicTree};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::storage::RecordStorage;
use crate::transcript;

/// What a call to [`ChatSession::send_message`] turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing was written.
    Ignored,
    /// Input carried the topic prefix; a topic was created and made current.
    TopicCreated { id: NodeId, label: String },
    /// The backend replied and the reply was logged in the current topic.
    Replied(String),
    /// The backend failed; the error was logged in the current topic as a
    /// system line instead of being raised.
    BackendFailed(String),
}

/// One open conversation: the topic tree, the model backend replies come
/// from, and the storage the records document is saved to.
///
/// Backend failures never escape `send_message`; they are written into the
/// transcript where the user can see them. Tree errors and storage errors do
/// surface, except during auto-save, which only logs.
pub struct ChatSession<B: ModelBackend, S: RecordStorage> {
    config: SessionConfig,
    backend: B,
    storage: S,
    tree: TopicTree,
}

impl<B: ModelBackend, S: RecordStorage> ChatSession<B, S> {
    pub fn new(config: SessionConfig, backend: B, storage: S) -> Self {
        Self {
            config,
            backend,
            storage,
            tree: TopicTree::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tree(&self) -> &TopicTree {
        &self.tree
    }

    /// The topic new messages currently go to.
    pub fn current_topic(&self) -> &TopicNode {
        self.tree.current()
    }

    /// The whole conversation as an indented outline.
    pub fn outline(&self) -> String {
        self.tree.render()
    }

    /// Handles one line of user input.
    ///
    /// Input starting with the configured topic prefix creates a new topic
    /// under the current one and switches there. Anything else is logged as a
    /// user line in the current topic, the topic's conversation is replayed
    /// to the backend, and the reply (or the backend's error) is logged after
    /// it.
    pub async fn send_message(&mut self, input: &str) -> Result<SendOutcome> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let outcome = if let Some(label) = input.strip_prefix(self.config.topic_prefix.as_str()) {
            let label = label.trim().to_string();
            let id = self.tree.add_topic(label.clone());
            self.tree
                .append_entry(&id, transcript::system_line(&format!("created topic '{label}'")))?;
            info!("created topic '{label}' and switched there");
            SendOutcome::TopicCreated { id, label }
        } else {
            let current_id = self.tree.current_id().to_string();
            self.tree
                .append_entry(&current_id, transcript::user_line(input))?;

            let turns = transcript::turns_from_entries(&self.tree.current().entries);
            match self.backend.converse(&turns).await {
                Ok(reply) => {
                    self.tree
                        .append_entry(&current_id, transcript::assistant_line(&reply))?;
                    SendOutcome::Replied(reply)
                }
                Err(err) => {
                    let notice = format!("model error: {err}");
                    warn!("backend failed, logging the error in the transcript: {err}");
                    self.tree
                        .append_entry(&current_id, transcript::system_line(&notice))?;
                    SendOutcome::BackendFailed(notice)
                }
            }
        };

        self.autosave().await;
        Ok(outcome)
    }

    /// Creates a topic under the current one and switches there.
    pub async fn create_topic(&mut self, label: &str) -> Result<NodeId> {
        let id = self.tree.add_topic(label);
        self.tree
            .append_entry(&id, transcript::system_line(&format!("created topic '{label}'")))?;
        self.autosave().await;
        Ok(id)
    }

    /// Creates a topic under an explicit parent without moving the cursor.
    pub async fn add_child_topic(&mut self, parent_id: &str, label: &str) -> Result<NodeId> {
        let id = self.tree.add_child(parent_id, label)?;
        self.tree.append_entry(
            parent_id,
            transcript::system_line(&format!("added child topic '{label}'")),
        )?;
        self.autosave().await;
        Ok(id)
    }

    /// Creates a topic from a selected excerpt of an existing conversation.
    ///
    /// The excerpt becomes the topic label. Whether the new topic also
    /// becomes current is the `auto_switch` setting.
    pub async fn create_topic_from_excerpt(
        &mut self,
        parent_id: &str,
        excerpt: &str,
    ) -> Result<NodeId> {
        let id = self.tree.add_child(parent_id, excerpt)?;
        self.tree.append_entry(
            parent_id,
            transcript::system_line(&format!("created topic '{excerpt}' from an excerpt")),
        )?;
        if self.config.auto_switch {
            self.tree.set_current(&id)?;
        }
        self.autosave().await;
        Ok(id)
    }

    /// Deletes a topic and its whole subtree.
    pub async fn delete_topic(&mut self, id: &str) -> Result<()> {
        let parent_id = self
            .tree
            .parent_of(id)
            .map(|parent| parent.id().to_string());
        let removed = self.tree.delete(id)?;
        if let Some(parent_id) = parent_id {
            self.tree.append_entry(
                &parent_id,
                transcript::system_line(&format!("deleted topic '{}'", removed.topic)),
            )?;
        }
        self.autosave().await;
        Ok(())
    }

    /// Renames a topic in place.
    pub async fn rename_topic(&mut self, id: &str, label: &str) -> Result<()> {
        self.tree.rename(id, label)?;
        self.tree.append_entry(
            id,
            transcript::system_line(&format!("renamed topic to '{label}'")),
        )?;
        self.autosave().await;
        Ok(())
    }

    /// Makes another topic current. Cursor moves are not persisted.
    pub fn switch_topic(&mut self, id: &str) -> Result<()> {
        self.tree.set_current(id)?;
        Ok(())
    }

    /// Appends a raw entry to a topic's log.
    pub async fn append_entry(&mut self, id: &str, entry: &str) -> Result<()> {
        self.tree.append_entry(id, entry)?;
        self.autosave().await;
        Ok(())
    }

    /// Saves the records document to its configured location.
    pub async fn save_records(&self) -> Result<PathBuf> {
        let path = self.config.records_path();
        self.storage.save(&path, &self.tree.to_document()).await?;
        info!("saved conversation records to {}", path.display());
        Ok(path)
    }

    /// Saves the records document to an explicit path.
    pub async fn save_records_as(&self, path: &Path) -> Result<()> {
        self.storage.save(path, &self.tree.to_document()).await
    }

    /// Replaces the conversation with the one in the records file at `path`.
    ///
    /// The open conversation is kept untouched unless loading and rebuilding
    /// both succeed.
    pub async fn open_records(&mut self, path: &Path) -> Result<()> {
        let document = self.storage.load(path).await?;
        let tree = TopicTree::from_document(document)?;
        self.tree = tree;
        info!("opened conversation records from {}", path.display());
        Ok(())
    }

    /// Starts over with a fresh conversation. Saved records are not touched.
    pub fn new_conversation(&mut self) {
        self.tree = TopicTree::new();
    }

    /// Models the backend offers, for a model picker.
    pub async fn list_models(&self) -> chat_backend::Result<Vec<String>> {
        self.backend.list_models().await
    }

    async fn autosave(&self) {
        if !self.config.auto_save {
            return;
        }
        if let Err(err) = self.save_records().await {
            warn!("auto-save failed: {err}");
        }
    }
}

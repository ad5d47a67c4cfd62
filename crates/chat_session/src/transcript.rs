//! Transcript line format of the entry log.
//!
//! Every chat entry a session writes starts with one of three speaker tags.
//! The tags are part of the saved records, so they double as the parser
//! contract when a reopened conversation is replayed to the backend.

use chat_backend::Turn;

pub const USER_TAG: &str = "you: ";
pub const ASSISTANT_TAG: &str = "ai: ";
pub const SYSTEM_TAG: &str = "system: ";

pub fn user_line(text: &str) -> String {
    format!("{USER_TAG}{text}")
}

pub fn assistant_line(text: &str) -> String {
    format!("{ASSISTANT_TAG}{text}")
}

pub fn system_line(text: &str) -> String {
    format!("{SYSTEM_TAG}{text}")
}

/// Rebuilds the backend conversation from a node's entry log.
///
/// Only user and assistant lines become turns. System lines are audit notes,
/// and lines without any known tag (hand-edited records) are skipped rather
/// than guessed at.
pub fn turns_from_entries(entries: &[String]) -> Vec<Turn> {
    let mut turns = Vec::new();
    for entry in entries {
        if let Some(text) = entry.strip_prefix(USER_TAG) {
            turns.push(Turn::user(text));
        } else if let Some(text) = entry.strip_prefix(ASSISTANT_TAG) {
            turns.push(Turn::assistant(text));
        }
    }
    turns
}

//! # Chat Session
//!
//! Glues the pieces of the chat client together: routes user input into the
//! topic tree, replays conversations to the model backend, and saves and
//! loads the JSON records document.

pub mod config;
pub mod error;
pub mod manager;
pub mod storage;
pub mod transcript;

// Re-exports
pub use config::{SessionConfig, RECORDS_FILE_NAME};
pub use error::SessionError;
pub use manager::{ChatSession, SendOutcome};
pub use storage::{FileRecordStorage, RecordStorage};

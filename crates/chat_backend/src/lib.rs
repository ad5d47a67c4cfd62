//! # Chat Backend
//!
//! The seam between the conversation model and whatever produces replies.
//! Ships an Ollama provider for local models and an offline echo provider.

pub mod provider;
pub mod providers;

// Re-exports
pub use provider::{BackendError, ModelBackend, Result, Speaker, Turn};
pub use providers::{EchoBackend, OllamaBackend};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Model returned no reply")]
    NoReply,
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Who produced a turn of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
    System,
}

/// One turn of an ordered conversation handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::System,
            text: text.into(),
        }
    }
}

/// A conversational model the client can talk to.
///
/// `converse` takes the whole conversation so far, oldest turn first, and
/// returns the model's reply text. Errors are opaque to callers beyond their
/// `Display` form; the session layer shows them in the transcript instead of
/// failing the conversation.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn converse(&self, turns: &[Turn]) -> Result<String>;

    /// List available models
    async fn list_models(&self) -> Result<Vec<String>> {
        // Default implementation returns empty list
        Ok(vec![])
    }
}

use async_trait::async_trait;

use crate::provider::{BackendError, ModelBackend, Result, Speaker, Turn};

/// Offline backend that repeats the last user turn back.
///
/// Useful for demos without a model server and as the stand-in backend in
/// session tests. The failing variant exercises the error path.
pub struct EchoBackend {
    fail: bool,
}

impl EchoBackend {
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// A backend whose `converse` always fails, for testing error handling.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for EchoBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelBackend for EchoBackend {
    async fn converse(&self, turns: &[Turn]) -> Result<String> {
        if self.fail {
            return Err(BackendError::Api("echo backend set to fail".to_string()));
        }
        turns
            .iter()
            .rev()
            .find(|turn| turn.speaker == Speaker::User)
            .map(|turn| format!("echo: {}", turn.text))
            .ok_or(BackendError::NoReply)
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(vec!["echo".to_string()])
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the records file inside the records directory. Fixed, so the
/// client always reopens the conversation it last saved.
pub const RECORDS_FILE_NAME: &str = "chat_all_records.json";

const CONFIG_FILE_PATH: &str = "treechat.toml";

/// Immutable settings a session is constructed with.
///
/// `load` resolves them once at startup from `treechat.toml` and
/// `TREECHAT_*` environment variables; after that the session only ever
/// reads the struct it was handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory the records file lives in.
    pub records_dir: PathBuf,
    /// Save the records file after every mutating operation.
    pub auto_save: bool,
    /// Make a topic created from an excerpt the current topic.
    pub auto_switch: bool,
    /// Input starting with this prefix creates a topic instead of chatting.
    pub topic_prefix: String,
    /// Model name handed to the backend.
    pub model: String,
    /// Base URL of the local Ollama server.
    pub ollama_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("records"),
            auto_save: false,
            auto_switch: true,
            topic_prefix: "topic:".to_string(),
            model: "llama3".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
        }
    }
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

impl SessionConfig {
    /// Resolves the effective configuration: defaults, then the config file
    /// if present, then environment variable overrides.
    pub fn load() -> Self {
        let mut config = SessionConfig::default();

        if Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<SessionConfig>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(records_dir) = std::env::var("TREECHAT_RECORDS_DIR") {
            config.records_dir = PathBuf::from(records_dir);
        }
        if let Ok(auto_save) = std::env::var("TREECHAT_AUTO_SAVE") {
            config.auto_save = parse_bool_env(&auto_save);
        }
        if let Ok(auto_switch) = std::env::var("TREECHAT_AUTO_SWITCH") {
            config.auto_switch = parse_bool_env(&auto_switch);
        }
        if let Ok(topic_prefix) = std::env::var("TREECHAT_TOPIC_PREFIX") {
            config.topic_prefix = topic_prefix;
        }
        if let Ok(model) = std::env::var("TREECHAT_MODEL") {
            config.model = model;
        }
        if let Ok(ollama_url) = std::env::var("TREECHAT_OLLAMA_URL") {
            config.ollama_url = ollama_url;
        }
        config
    }

    /// Full path of the records file under the configured directory.
    pub fn records_path(&self) -> PathBuf {
        self.records_dir.join(RECORDS_FILE_NAME)
    }
}

pub mod echo;
pub mod ollama;

pub use echo::EchoBackend;
pub use ollama::OllamaBackend;

//! Application configuration

use std::env;

/// The public SRD monster collection used when `MONSTERS_URL` is unset.
const DEFAULT_MONSTERS_URL: &str =
    "https://gist.githubusercontent.com/tkfu/9819e4ac6d529e225e9fc58b358c3479/raw/srd_5e_monsters.json";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Source URL for the raw monster collection
    pub monsters_url: String,
    /// Ollama API base URL
    pub ollama_base_url: String,
    /// Model for attack-roll extraction
    pub ollama_model: String,
    /// Destination path for the transformed collection
    pub output_path: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so loading cannot fail.
    pub fn from_env() -> Self {
        Self {
            monsters_url: env::var("MONSTERS_URL")
                .unwrap_or_else(|_| DEFAULT_MONSTERS_URL.to_string()),
            ollama_base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "gemma3:latest".to_string()),
            output_path: env::var("OUTPUT_PATH")
                .unwrap_or_else(|_| "user_data/monsters.json".to_string()),
        }
    }
}

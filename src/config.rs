//! Application configuration.
//!
//! The only configurable value is the question-set directory; server
//! address and port are constants.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    content: Option<ContentConfig>,
}

#[derive(Debug, Deserialize)]
struct ContentConfig {
    path: Option<String>,
}

/// Load the question-set directory with priority: config.toml > .env > default
pub fn load_data_dir() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(content) = config.content {
                if let Some(path) = content.path {
                    tracing::info!("Using question sets from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATA_DIR
    if let Ok(path) = std::env::var("DATA_DIR") {
        tracing::info!("Using question sets from DATA_DIR env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from("data");
    tracing::info!("Using default question-set directory: {}", default.display());
    default
}

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

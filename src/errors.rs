use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine the home directory")]
    HomeDirNotFound,
    #[error("Failed to read config file {}: {}", .0.display(), .1)]
    ReadFile(PathBuf, std::io::Error),
    #[error("Failed to parse config JSON: {0}")]
    ParseJson(serde_json::Error),
    #[error("Failed to encode config to JSON: {0}")]
    EncodeJson(serde_json::Error),
    #[error("Failed to write config file {}: {}", .0.display(), .1)]
    WriteFile(PathBuf, std::io::Error),
}

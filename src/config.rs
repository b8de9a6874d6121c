// config.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

const CONFIG_FILE_NAME: &str = ".gatorconfig.json";

// Missing keys decode as empty strings; unrecognized keys are dropped.
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub db_url: String,
    pub current_user_name: String,
}

// The config file lives directly under the home directory. It is created
// by hand before first use, never by this tool.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home_dir.join(CONFIG_FILE_NAME))
}

impl Config {
    // Function to load config from a file
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadFile(config_path.to_path_buf(), e))?;
        serde_json::from_str(&config_str).map_err(ConfigError::ParseJson)
    }

    // Function to save config to a file, replacing its entire contents
    pub fn save(&self, config_path: &Path) -> Result<(), ConfigError> {
        let config_str = serde_json::to_string_pretty(self).map_err(ConfigError::EncodeJson)?;
        std::fs::write(config_path, config_str)
            .map_err(|e| ConfigError::WriteFile(config_path.to_path_buf(), e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(config_path, std::fs::Permissions::from_mode(0o644))
                .map_err(|e| ConfigError::WriteFile(config_path.to_path_buf(), e))?;
        }

        Ok(())
    }

    // Updates the current user and persists the full record, leaving
    // db_url untouched.
    pub fn set_user(&mut self, username: &str, config_path: &Path) -> Result<(), ConfigError> {
        self.current_user_name = username.to_string();
        self.save(config_path)
    }
}

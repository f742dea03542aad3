use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerupError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend base URL, e.g. `https://books.example.com`.
    #[serde(default)]
    pub api_url: String,
    /// Bearer token sent with uploads. Empty means unauthenticated.
    #[serde(default)]
    pub api_token: String,
    pub data_dir: String,
    /// Default for `upload --create-hierarchy`.
    #[serde(default)]
    pub create_hierarchy: bool,
    /// Default for `upload --overwrite`.
    #[serde(default)]
    pub overwrite_existing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_token: String::new(),
            data_dir: default_data_dir().to_string_lossy().to_string(),
            create_hierarchy: false,
            overwrite_existing: false,
        }
    }
}

impl Settings {
    pub fn token(&self) -> Option<&str> {
        if self.api_token.is_empty() {
            None
        } else {
            Some(&self.api_token)
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("ledgerup")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ledgerup")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| LedgerupError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

pub fn get_data_dir() -> PathBuf {
    PathBuf::from(&load_settings().data_dir)
}

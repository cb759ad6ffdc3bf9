//! Configuration Management
//!
//! Handles persistent configuration storage for parcelres.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Pretty-print output documents
    #[serde(default)]
    pub pretty: Option<bool>,
    /// Last document read
    #[serde(default)]
    pub last_document: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("parcelres").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective output style (CLI > config > pretty)
    pub fn effective_pretty(&self, compact_flag: bool) -> bool {
        !compact_flag && self.pretty.unwrap_or(true)
    }

    /// Get effective input file (CLI > config)
    pub fn effective_document(&self, file: Option<&Path>) -> Option<PathBuf> {
        file.map(Path::to_path_buf)
            .or_else(|| self.last_document.clone())
    }

    /// Set last document and save
    pub fn set_last_document(&mut self, path: &Path) -> Result<()> {
        self.last_document = Some(path.to_path_buf());
        self.save()
    }
}

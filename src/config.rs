use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for scriptmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prepended to the input file name (joined with `_`) when saving marked output
    pub output_prefix: String,

    /// Paragraphs starting with any of these are never treated as dialogue
    /// (scene markers, stage directions, character lists)
    pub marker_prefixes: Vec<String>,

    /// Subdirectory next to the input that receives `format` output
    pub formatted_dir_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_prefix: "标红".to_string(),
            marker_prefixes: vec!["【".to_string(), "△".to_string(), "人物".to_string()],
            formatted_dir_name: "已格式化".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Return defaults if no config found
        Ok(Settings::default())
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(settings)
    }

    /// Save settings to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the settings file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scriptmark").join("config.toml"))
    }

    /// Initialize default settings file, returning where it was written
    pub fn init_default() -> Result<PathBuf> {
        let path = Self::get_config_path()
            .context("No configuration directory available on this platform")?;
        Settings::default().save_to(&path)?;
        Ok(path)
    }

    pub fn markers(&self) -> Vec<&str> {
        self.marker_prefixes.iter().map(String::as_str).collect()
    }
}

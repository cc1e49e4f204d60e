use crate::models::config::MenuConfig;
use std::fs;
use std::path::PathBuf;

/// Configuration manager for scanner settings
pub struct ConfigManager {
    config_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager instance
    ///
    /// This will create the config directory if it doesn't exist.
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, String> {
        // Get platform-specific config directory
        let config_dir = dirs::config_dir()
            .ok_or("Failed to determine config directory")?
            .join("menu-scanner");

        // Create directory if it doesn't exist
        fs::create_dir_all(&config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        let config_path = config_dir.join("config.json");

        Ok(Self {
            config_dir,
            config_path,
        })
    }

    /// Save configuration to disk
    pub fn save(&self, config: &MenuConfig) -> Result<(), String> {
        // Ensure config directory exists
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        // Serialize config to JSON (pretty print for human readability)
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        // Write to file
        fs::write(&self.config_path, json)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Load configuration from disk
    ///
    /// If config file doesn't exist, returns default configuration
    pub fn load(&self) -> Result<MenuConfig, String> {
        // If file doesn't exist, return default
        if !self.config_exists() {
            return Ok(MenuConfig::default());
        }

        // Read file
        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        // Parse JSON
        let config: MenuConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    /// Get the config file path
    pub fn config_file_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Check if config file exists
    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }
}

use crate::domain::error::ConfigError;
use crate::domain::models::Capabilities;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String, // "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_false")]
    pub file_logging_enabled: bool,
    #[serde(default = "default_true")]
    pub console_logging_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_prefix")]
    pub file_name_prefix: String,
    #[serde(default = "default_false")]
    pub show_file_line: bool,
    #[serde(default = "default_false")]
    pub show_thread_ids: bool,
    #[serde(default = "default_true")]
    pub show_target: bool,
    #[serde(default = "default_true")]
    pub ansi_colors: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String, // "daily", "hourly", "minutely", "never"
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            file_logging_enabled: default_false(),
            console_logging_enabled: default_true(),
            log_dir: default_log_dir(),
            file_name_prefix: default_prefix(),
            show_file_line: default_false(),
            show_thread_ids: default_false(),
            show_target: default_true(),
            ansi_colors: default_true(),
            rotation: default_rotation(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_prefix() -> String {
    "magicblue".to_string()
}
fn default_rotation() -> String {
    "daily".to_string()
}

/// One configured bulb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulbConfig {
    pub name: String,
    /// Device identifier, usually the BLE MAC address
    pub address: String,
    /// Protocol/firmware version handed to the driver
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_true")]
    pub supports_brightness: bool,
    #[serde(default = "default_true")]
    pub supports_availability: bool,
}

impl BulbConfig {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            version: default_version(),
            supports_brightness: true,
            supports_availability: true,
        }
    }

    /// Check required fields; `index` is the entry's position in the file
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConfigError::MissingName { index });
        }
        if self.address.trim().is_empty() {
            return Err(ConfigError::MissingAddress {
                name: name.to_string(),
            });
        }
        if self.version == 0 {
            return Err(ConfigError::InvalidVersion {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            supports_brightness: self.supports_brightness,
            supports_availability: self.supports_availability,
        }
    }
}

pub const DEFAULT_VERSION: u32 = 9;

fn default_version() -> u32 {
    DEFAULT_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    // Logging Settings
    #[serde(default)]
    pub log_settings: LogSettings,

    #[serde(default)]
    pub bulbs: Vec<BulbConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            log_settings: LogSettings::default(),
            bulbs: Vec::new(),
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    30
}

impl Settings {
    /// Check every bulb entry, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidPollInterval);
        }

        let mut seen = HashSet::new();
        for (index, bulb) in self.bulbs.iter().enumerate() {
            bulb.validate(index)?;
            let name = bulb.name.trim();
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateName(name.to_string()));
            }
        }
        Ok(())
    }
}

pub struct SettingsService {
    settings: Settings,
    settings_path: PathBuf,
}

impl SettingsService {
    /// Load settings from the default location under the user config dir
    pub fn new() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::from_path(settings_path)
    }

    /// Load settings from an explicit file; a missing file yields defaults
    pub fn from_path(settings_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let settings_path = settings_path.into();
        let settings = if settings_path.exists() {
            Self::load_from_file(&settings_path)?
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            settings_path,
        })
    }

    fn get_settings_path() -> anyhow::Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        path.push("MagicBlue");
        fs::create_dir_all(&path)?;
        path.push("settings.json");
        Ok(path)
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Settings> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid settings file {}: {}", path.display(), e))?;
        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.settings_path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

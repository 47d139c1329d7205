use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Fallback lookahead window for the `birthdays` report.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub birthdays: BirthdaysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactsConfig {
    /// Overrides the default `~/.rolodex/contacts.json` location.
    pub book_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BirthdaysConfig {
    pub default_window_days: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts: ContactsConfig { book_file: None },
            birthdays: BirthdaysConfig {
                default_window_days: Some(DEFAULT_WINDOW_DAYS),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        // Read and parse config file
        let content =
            fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Serialize and save config
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Effective lookahead window for the `birthdays` report.
    pub fn window_days(&self) -> u32 {
        self.birthdays.default_window_days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

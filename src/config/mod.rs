use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ScanError;

const DEFAULT_DIR_NAME: &str = ".receipt_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User-facing knobs for the scanning CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Symbol prepended to displayed amounts.
    pub currency: String,
    /// Whether monthly reports list months with no records as 0.0 buckets.
    #[serde(default)]
    pub zero_fill_months: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "$".into(),
            zero_fill_months: false,
        }
    }
}

/// Returns the application-specific data directory, defaulting to
/// `~/.receipt_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RECEIPT_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves the JSON config under the app data dir.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::in_dir(app_data_dir())
    }

    pub fn in_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Reads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, ScanError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the config atomically by staging to a temporary file.
    pub fn save(&self, config: &Config) -> Result<(), ScanError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::in_dir(dir.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config.currency, "$");
        assert!(!config.zero_fill_months);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::in_dir(dir.path().to_path_buf());
        let config = Config {
            currency: "€".into(),
            zero_fill_months: true,
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "€");
        assert!(loaded.zero_fill_months);
    }
}

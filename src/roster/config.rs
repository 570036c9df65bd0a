use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ENDPOINT: &str = "http://localhost:3000/students";

/// Configuration for roster, stored in config.json under the platform
/// config directory. The base endpoint is the only configuration value,
/// fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Base URL of the record collection (e.g. http://host:3000/students)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.endpoint, "http://localhost:3000/students");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = RosterConfig {
            endpoint: "http://records.example:8080/students".to_string(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let parsed: RosterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.endpoint, "http://localhost:3000/students");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RosterConfig {
            endpoint: "http://10.0.0.2/api/students".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RosterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}

//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::config::{ConfigError, GateConfig};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a JSON file overriding the scroll gate defaults
    /// Example: ./gate.json
    pub gate_config_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            gate_config_path: std::env::var("GATE_CONFIG").ok(),
        }
    }

    /// Check if a gate config file is configured
    pub fn has_gate_config(&self) -> bool {
        self.gate_config_path.is_some()
    }

    /// Read and validate the gate config file, or the defaults if none is set
    pub fn load_gate_config(&self) -> Result<GateConfig, ConfigError> {
        let Some(path) = self.gate_config_path.as_deref() else {
            return Ok(GateConfig::default());
        };

        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        GateConfig::from_json(&json)
    }

    /// Gate config for serving: falls back to the defaults with a warning
    pub fn gate_config_or_default(&self) -> GateConfig {
        match self.load_gate_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default gate config: {}", e);
                GateConfig::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("scrollgate-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = Config {
            gate_config_path: None,
        };
        assert!(!config.has_gate_config());
        assert_eq!(config.load_gate_config(), Ok(GateConfig::default()));
    }

    #[test]
    fn test_loads_file() {
        let path = write_temp("valid.json", r#"{"pausePoint": 0.4}"#);
        let config = Config {
            gate_config_path: Some(path),
        };

        let gate = config.load_gate_config().unwrap();
        assert_eq!(gate.pause_point, 0.4);
        assert_eq!(gate.message_count(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let config = Config {
            gate_config_path: Some("/nonexistent/scrollgate/gate.json".to_string()),
        };
        assert!(matches!(
            config.load_gate_config(),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(config.gate_config_or_default(), GateConfig::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let path = write_temp("invalid.json", r#"{"messages": ["only one"]}"#);
        let config = Config {
            gate_config_path: Some(path),
        };

        assert_eq!(
            config.load_gate_config(),
            Err(ConfigError::TooFewMessages(1))
        );
        assert_eq!(config.gate_config_or_default(), GateConfig::default());
    }
}

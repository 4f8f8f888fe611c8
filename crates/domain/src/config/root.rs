use super::{CacheConfig, ConfigError, FallbackConfig, LoggingConfig, ServerConfig, SheetsConfig};
use serde::{Deserialize, Serialize};

/// Main configuration, loaded from a TOML file with CLI overrides applied on
/// top. Every section has defaults so the server runs with no config file at
/// all (fallback data only).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sheets: SheetsConfig,

    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub sheet_id: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::Parse {
                    path: path.to_string(),
                    message: e.to_string(),
                })?
            }
            None => Config::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(sheet_id) = overrides.sheet_id {
            self.sheets.sheet_id = Some(sheet_id);
        }
        if let Some(api_key) = overrides.api_key {
            self.sheets.api_key = Some(api_key);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.sweep_interval_secs must be non-zero".into(),
            ));
        }
        if self.sheets.sheet_id.is_some() != self.sheets.api_key.is_some() {
            return Err(ConfigError::Invalid(
                "sheets.sheet_id and sheets.api_key must be set together".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::load(None, CliOverrides::default()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.remote_ttl_secs, 600);
        assert_eq!(config.cache.fallback_ttl_secs, 120);
        assert!(!config.sheets.is_configured());
    }

    #[test]
    fn parses_toml_sections() {
        let raw = r#"
            [server]
            port = 9090
            bind_address = "127.0.0.1"

            [sheets]
            sheet_id = "abc123"
            api_key = "key"

            [cache]
            remote_ttl_secs = 60
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        config.validate().unwrap();
        assert_eq!(config.server.port, 9090);
        assert!(config.sheets.is_configured());
        assert_eq!(config.cache.remote_ttl_secs, 60);
        // Unset sections keep their defaults.
        assert_eq!(config.cache.sweep_interval_secs, 600);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_overrides_win() {
        let overrides = CliOverrides {
            port: Some(3000),
            bind_address: None,
            sheet_id: Some("sheet".into()),
            api_key: Some("key".into()),
        };
        let config = Config::load(None, overrides).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.sheets.is_configured());
    }

    #[test]
    fn rejects_half_configured_sheets() {
        let overrides = CliOverrides {
            sheet_id: Some("sheet".into()),
            ..Default::default()
        };
        let config = Config::load(None, overrides).unwrap();
        assert!(config.validate().is_err());
    }
}

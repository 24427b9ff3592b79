use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "LEKTURY_CONFIG";

/// Looked up in the working directory when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "lektury";

const ENV_PREFIX: &str = "LEKTURY";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Seconds between sweeps of expired cache entries; `0` disables sweeping.
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: lektury_catalog::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: 60,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=debug".to_string(),
        }
    }
}

impl CacheConfig {
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}

impl Settings {
    /// Load settings from the optional config file and `LEKTURY__*` variables.
    ///
    /// A file named by `LEKTURY_CONFIG` must exist; the default `lektury.toml`
    /// is optional. Environment variables take precedence over the file.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        );

        Self::from_builder(builder)
    }

    /// Build settings from arbitrary sources; missing keys keep their defaults.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_empty_sources_yield_defaults() {
        let settings = Settings::from_builder(Config::builder()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.bind, "127.0.0.1:8080");
        assert_eq!(settings.upstream.base_url, "https://wolnelektury.pl/api/");
        assert_eq!(settings.cache.sweep_interval(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_file_overrides_single_keys() {
        let toml = r#"
            [server]
            bind = "0.0.0.0:9000"

            [cache]
            sweep_interval_secs = 0
        "#;
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let settings = Settings::from_builder(builder).unwrap();

        assert_eq!(settings.server.bind, "0.0.0.0:9000");
        assert_eq!(settings.cache.sweep_interval(), None);
        assert_eq!(settings.log, LogConfig::default());
    }

    #[test]
    fn test_later_sources_take_precedence() {
        let builder = Config::builder()
            .add_source(File::from_str(
                "[log]\nfilter = \"debug\"",
                FileFormat::Toml,
            ))
            .set_override("log.filter", "warn")
            .unwrap();
        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.log.filter, "warn");
    }
}

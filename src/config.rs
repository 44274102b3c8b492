use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Variable naming a configuration file to load instead of `config/`
pub const CONFIG_PATH_ENV: &str = "MOCKAPI_CONFIG";

/// Origin allowed when `ALLOWED_ORIGINS` is not set
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3012";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_true")]
    pub supports_credentials: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human-readable events
    Pretty,
    /// Single-line plain text
    Text,
}

impl LogFormat {
    /// Unknown names fall back to plain text
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Text,
        }
    }
}

impl LoggingSettings {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_name(&self.format)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: Some(1),
            },
            cors: CorsSettings {
                allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
                supports_credentials: true,
            },
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MOCKAPI__)
    /// 5. The plain `PORT` and `ALLOWED_ORIGINS` variables
    ///
    /// When `MOCKAPI_CONFIG` names a file, it replaces steps 2 and 3.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.trim().is_empty()) {
            return Self::load_from(path.trim());
        }

        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env())
            .build()?
            .try_deserialize::<Settings>()?;

        settings.with_process_env_overrides()
    }

    /// Load configuration from a custom path
    ///
    /// The file must exist. Environment variables still apply on top of it.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()).required(true))
            .add_source(prefixed_env())
            .build()?
            .try_deserialize::<Settings>()?;

        settings.with_process_env_overrides()
    }

    fn with_process_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_env_overrides(
            std::env::var("PORT").ok(),
            std::env::var("ALLOWED_ORIGINS").ok(),
        )
    }

    /// Apply the `PORT` and `ALLOWED_ORIGINS` values on top of loaded settings
    ///
    /// An unparseable port is an error. Origins are comma separated; blank
    /// entries are dropped and a value with no entries keeps the current list.
    pub fn with_env_overrides(
        mut self,
        port: Option<String>,
        allowed_origins: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = port.filter(|p| !p.trim().is_empty()) {
            self.server.port = raw.trim().parse().map_err(|e| {
                ConfigError::Message(format!("invalid PORT {:?}: {}", raw, e))
            })?;
        }

        if let Some(raw) = allowed_origins {
            let origins = parse_origin_list(&raw);
            if !origins.is_empty() {
                self.cors.allowed_origins = origins;
            }
        }

        Ok(self)
    }
}

/// Split a comma-separated origin list
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    let defaults = Settings::default();
    builder
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.workers", defaults.server.workers.unwrap_or(1) as i64)?
        .set_default("cors.allowed_origins", defaults.cors.allowed_origins)?
        .set_default("cors.supports_credentials", defaults.cors.supports_credentials)?
        .set_default("logging.level", defaults.logging.level)?
        .set_default("logging.format", defaults.logging.format)
}

// e.g., MOCKAPI__SERVER__PORT -> server.port
fn prefixed_env() -> Environment {
    Environment::with_prefix("MOCKAPI")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

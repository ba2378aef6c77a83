use serde::Deserialize;
use thiserror::Error;

/// Port used when neither `PORT` nor `APP__SERVER__PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("Invalid PORT value specified in environment variables: '{0}'")]
    InvalidPort(String),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from config files, `APP__*` variables and finally `PORT`
    pub fn load() -> Result<Self, AppConfigError> {
        Self::load_with_port(std::env::var("PORT").ok())
    }

    /// Same as [`AppConfig::load`] with the `PORT` value supplied by the caller.
    /// A blank value counts as unset.
    pub fn load_with_port(port: Option<String>) -> Result<Self, AppConfigError> {
        let mut config: Self = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(raw) = port.filter(|p| !p.trim().is_empty()) {
            config.server.port = parse_port(&raw)?;
        }

        Ok(config)
    }
}

/// Parse a port number, rejecting anything that is not a `u16`
pub fn parse_port(raw: &str) -> Result<u16, AppConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| AppConfigError::InvalidPort(raw.to_string()))
}

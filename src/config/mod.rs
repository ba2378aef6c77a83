//! Application configuration

mod app_config;

pub use app_config::{
    parse_port, AppConfig, AppConfigError, LogFormat, LoggingConfig, ServerConfig, DEFAULT_PORT,
};

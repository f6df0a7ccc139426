pub mod config;
pub mod messages;

pub use config::{AppConfig, ConfigError};

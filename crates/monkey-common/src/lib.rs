pub mod config;

pub use config::{ConfigError, MonkeyConfig, OutputFormat, CONFIG_FILE_NAME};

pub mod app_config;
pub mod config;
pub mod targets;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, MAX_PAGES_CEILING};
pub use config::{load_app_config, load_app_config_from_env};
pub use targets::{load_targets, TargetsFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read targets file {path}: {source}")]
    TargetsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse targets file: {0}")]
    TargetsFileParse(#[from] serde_yaml::Error),

    #[error("targets validation failed: {0}")]
    Validation(String),
}

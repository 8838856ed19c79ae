use std::io;
use thiserror::Error;

use crate::components::body::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid time grid: {0}")]
    InvalidTimeGrid(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Report error: {0}")]
    ReportError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

//! Backup errors.

use rwa_rcon::RconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("{key} is not a valid port number: {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("rcon error: {0}")]
    Rcon(#[from] RconError),
}

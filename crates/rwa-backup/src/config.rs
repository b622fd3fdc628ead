//! Backup configuration, taken entirely from the environment.
//!
//! Unlike the torching bot, the backup runs unattended from cron, so the
//! connection variables are required: a missing one is a startup error
//! naming the variable rather than a silent fallback.

use std::path::PathBuf;

use crate::error::BackupError;

#[derive(Debug, Clone)]
pub struct BackupConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
    pub src_dir: PathBuf,
    pub dest_dir: PathBuf,
}

impl BackupConfig {
    pub fn from_env() -> Result<Self, BackupError> {
        let host = require("RWA_RCON_HOST")?;
        let port_raw = require("RWA_RCON_PORT")?;
        let port = port_raw.parse().map_err(|_| BackupError::InvalidPort {
            key: "RWA_RCON_PORT",
            value: port_raw,
        })?;
        let password = require("RWA_RCON_PASSWORD")?;

        let src_dir = std::env::var("RWA_SRC_DIR").unwrap_or_else(|_| "/mnt/src".into());
        let dest_dir = std::env::var("RWA_DEST_DIR").unwrap_or_else(|_| "/mnt/dest".into());

        Ok(Self {
            host,
            port,
            password,
            src_dir: src_dir.into(),
            dest_dir: dest_dir.into(),
        })
    }
}

fn require(key: &'static str) -> Result<String, BackupError> {
    std::env::var(key).map_err(|_| BackupError::MissingEnv(key))
}

//! Bot-level errors.
//!
//! Placement negatives (ground check failed, cell blocked) are control
//! flow, not errors; only transport failures and unreadable responses
//! land here. `PlayerAbsent` is deliberately fatal: the bot assumes a
//! single continuously-present player, and their disappearance ends the
//! run rather than being retried.

use rwa_rcon::RconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("{key} is not a valid port number: {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("player entity not found ({query})")]
    PlayerAbsent { query: &'static str },

    #[error("unrecognized {kind} response: {response:?}")]
    Parse {
        kind: &'static str,
        response: String,
    },

    #[error("rcon error: {0}")]
    Rcon(#[from] RconError),
}

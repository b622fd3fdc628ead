//! RCON client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RconError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("authentication rejected by server")]
    AuthFailed,

    #[error("invalid RCON packet length: {0}")]
    InvalidLength(i32),

    #[error("command body too long: {0} bytes (max {max})", max = crate::packet::MAX_BODY_LEN)]
    BodyTooLong(usize),

    #[error("response id mismatch: sent {sent}, got {got}")]
    IdMismatch { sent: i32, got: i32 },
}

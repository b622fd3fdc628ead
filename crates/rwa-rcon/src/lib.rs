//! Source RCON client for Minecraft server automation.
//!
//! Implements the client half of the Source RCON protocol over TCP:
//! connect, authenticate, then exchange plain-text commands and responses
//! one at a time. Consumers are written against the [`Console`] trait so
//! tests can substitute a scripted fake for the live connection.

pub mod client;
pub mod error;
pub mod pace;
pub mod packet;

pub use client::RconClient;
pub use error::RconError;
pub use pace::{IntervalTicker, Ticker};

/// A remote console that executes one text command and returns the
/// server's text response.
#[async_trait::async_trait]
pub trait Console: Send {
    async fn command(&mut self, cmd: &str) -> Result<String, RconError>;
}

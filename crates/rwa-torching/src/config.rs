//! Bot configuration.
//!
//! Connection parameters come from the environment with local-testing
//! defaults; tuning options come from an optional `torching.toml` where
//! every field has a default, so the bot runs with no config file at all.

use serde::Deserialize;
use std::path::Path;

use crate::error::BotError;

/// RCON connection parameters, read once at startup.
#[derive(Debug, Clone)]
pub struct Connection {
    pub host: String,
    pub password: String,
    pub port: u16,
}

impl Connection {
    /// Read `RCON_HOST`, `RCON_PASSWORD` and `RCON_PORT` from the
    /// environment, falling back to loopback defaults for local testing.
    pub fn from_env() -> Result<Self, BotError> {
        let host = std::env::var("RCON_HOST").unwrap_or_else(|_| "localhost".into());
        let password = std::env::var("RCON_PASSWORD").unwrap_or_else(|_| "testing".into());
        let port = match std::env::var("RCON_PORT") {
            Ok(raw) => raw.parse().map_err(|_| BotError::InvalidPort {
                key: "RCON_PORT",
                value: raw,
            })?,
            Err(_) => 25575,
        };
        Ok(Self {
            host,
            password,
            port,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TorchingConfig {
    /// Distance between candidate torch columns, in blocks.
    pub grid_spacing: i32,
    /// How many spacings out from the player to cover in each direction.
    pub half_width: i32,
    /// Extra cells probed up or down when direct placement fails.
    pub search_depth: i32,
    /// Delay between polling ticks, in seconds.
    pub poll_interval_secs: f64,
    /// Off-hand item that arms the bot.
    pub torch_item: String,
    /// Block placed at each candidate cell.
    pub torch_block: String,
    /// Block that counts as walkable ground below a cell.
    pub ground_block: String,
    /// Ground-cover block replaceable in a single conditional setblock.
    pub cover_block: String,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for TorchingConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 6,
            half_width: 2,
            search_depth: 1,
            poll_interval_secs: 1.0,
            torch_item: "minecraft:torch".into(),
            torch_block: "minecraft:torch".into(),
            ground_block: "minecraft:grass_block".into(),
            cover_block: "minecraft:grass".into(),
            logging: LoggingSection::default(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl TorchingConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TorchingConfig::default();
        assert_eq!(config.grid_spacing, 6);
        assert_eq!(config.half_width, 2);
        assert_eq!(config.search_depth, 1);
        assert_eq!(config.poll_interval_secs, 1.0);
        assert_eq!(config.torch_item, "minecraft:torch");
        assert_eq!(config.ground_block, "minecraft:grass_block");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_partial_config() {
        let config: TorchingConfig = toml::from_str(
            r#"
            grid_spacing = 8
            half_width = 3

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid_spacing, 8);
        assert_eq!(config.half_width, 3);
        // unspecified fields keep their defaults
        assert_eq!(config.search_depth, 1);
        assert_eq!(config.torch_block, "minecraft:torch");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn invalid_port_is_a_typed_error() {
        // set and clear in one test; parallel tests don't touch RCON_PORT
        std::env::set_var("RCON_PORT", "not-a-port");
        let err = Connection::from_env().unwrap_err();
        assert!(matches!(
            err,
            BotError::InvalidPort {
                key: "RCON_PORT",
                ..
            }
        ));

        std::env::set_var("RCON_PORT", "25566");
        let conn = Connection::from_env().unwrap();
        assert_eq!(conn.port, 25566);
        std::env::remove_var("RCON_PORT");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = TorchingConfig::load("/nonexistent/torching.toml").unwrap();
        assert_eq!(config.grid_spacing, 6);
    }
}

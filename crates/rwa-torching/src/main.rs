//! Torch patrol bot: keeps the area around a lone player lit while they
//! hold a torch in their off-hand.

mod config;
mod error;
mod grid;
mod patrol;
mod placer;
mod query;
#[cfg(test)]
mod scripted;

use std::time::Duration;

use config::{Connection, TorchingConfig};
use patrol::Patrol;
use rwa_rcon::{IntervalTicker, RconClient};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cfg = match TorchingConfig::load("torching.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load torching.toml: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let conn = match Connection::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "rwa-torching v{} connecting to {}:{}",
        env!("CARGO_PKG_VERSION"),
        conn.host,
        conn.port
    );

    let client = match RconClient::connect(&conn.host, conn.port, &conn.password).await {
        Ok(c) => c,
        Err(e) => {
            error!("rcon connection failed: {e}");
            std::process::exit(1);
        }
    };

    let interval = Duration::from_secs_f64(cfg.poll_interval_secs);
    let mut ticker = IntervalTicker::new(interval);
    let mut patrol = Patrol::new(client, cfg);

    // The loop only returns on fatal errors; the connection is dropped
    // (and the socket closed) on every path out of here.
    if let Err(e) = patrol.run(&mut ticker).await {
        error!("torch patrol stopped: {e}");
        std::process::exit(1);
    }
}

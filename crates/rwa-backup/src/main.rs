//! Daily world backup: freeze saves, rsync the data out, thaw saves,
//! narrating progress in chat. Intended to run from cron.

mod config;
mod error;
mod sequence;
mod sync;

use std::time::Duration;

use config::BackupConfig;
use rwa_rcon::{IntervalTicker, RconClient};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let cfg = match BackupConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "rwa-backup v{} connecting to {}:{}",
        env!("CARGO_PKG_VERSION"),
        cfg.host,
        cfg.port
    );

    let mut client = match RconClient::connect(&cfg.host, cfg.port, &cfg.password).await {
        Ok(c) => c,
        Err(e) => {
            error!("rcon connection failed: {e}");
            std::process::exit(1);
        }
    };

    // one-second beats for the in-chat countdown
    let mut ticker = IntervalTicker::new(Duration::from_secs(1));

    match sequence::run_backup(&mut client, &mut ticker, &cfg.src_dir, &cfg.dest_dir).await {
        Ok(true) => info!("backup complete"),
        Ok(false) => {
            // saves were re-enabled; nonzero exit so cron surfaces it
            error!("backup export failed");
            std::process::exit(1);
        }
        Err(e) => {
            error!("backup aborted: {e}");
            std::process::exit(1);
        }
    }
}

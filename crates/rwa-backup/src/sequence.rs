//! The backup sequence itself.
//!
//! A linear run of blocking commands: announce, count down, flush and
//! freeze world saves, export, report, thaw. Failure policy: a failed
//! export is non-fatal — the sequence warns in chat and still re-enables
//! saves, and once `save-off` has been issued, `save-on` is attempted on
//! every path out, even when a chat command in between failed.

use std::path::Path;

use rwa_rcon::{Console, Ticker};
use tracing::warn;

use crate::error::BackupError;
use crate::sync;

const COUNTDOWN_FROM: u32 = 4;

/// Run the whole backup sequence. The returned bool is the export
/// outcome; RCON transport failures are real errors.
pub async fn run_backup<C: Console>(
    console: &mut C,
    ticker: &mut impl Ticker,
    src: &Path,
    dest: &Path,
) -> Result<bool, BackupError> {
    console
        .command("say The daily backup script has been launched,")
        .await?;
    console
        .command("say freezing the server for a short time.")
        .await?;

    for i in (1..=COUNTDOWN_FROM).rev() {
        ticker.wait().await;
        console.command(&format!("say {i}")).await?;
    }

    console.command("save-all flush").await?;
    console.command("save-off").await?;

    // World writes are now frozen; whatever happens below, try to thaw
    // them before returning.
    let exported = export(console, src, dest).await;
    let thawed = console.command("save-on").await;

    let synced = exported?;
    thawed?;
    if !synced {
        warn!("backup export failed, see messages above");
    }
    Ok(synced)
}

async fn export<C: Console>(
    console: &mut C,
    src: &Path,
    dest: &Path,
) -> Result<bool, BackupError> {
    console.command("say exporting data...").await?;
    let synced = sync::sync_world(src, dest).await;
    if synced {
        console.command("say done!").await?;
    } else {
        console
            .command("say something went wrong, please check the server log.")
            .await?;
    }
    Ok(synced)
}

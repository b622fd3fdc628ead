//! Save-data synchronization via rsync.

use std::path::Path;

use tokio::process::Command;
use tracing::{info, warn};

/// Paths never copied into the backup: logs, plugin data, build
/// directories, and server jars.
pub const EXCLUDES: [&str; 4] = ["logs", "plugins", "work", "spigot_server-*.jar"];

/// The argument list handed to rsync. Trailing slashes make rsync copy
/// directory contents rather than the directory itself.
pub fn rsync_args(src: &Path, dest: &Path) -> Vec<String> {
    let mut args = vec![
        "-a".to_string(),
        format!("{}/", src.display()),
        format!("{}/", dest.display()),
    ];
    for exclude in EXCLUDES {
        args.push(format!("--exclude={exclude}"));
    }
    args
}

/// Copy the world data from `src` to `dest`.
///
/// Returns false on any failure: a missing directory (no rsync spawned),
/// a spawn error, or a nonzero exit status. The reason is logged; the
/// caller decides what the failure means for the rest of the sequence.
pub async fn sync_world(src: &Path, dest: &Path) -> bool {
    if !src.is_dir() {
        warn!("source directory not found: {}", src.display());
        return false;
    }
    if !dest.is_dir() {
        warn!("destination directory not found: {}", dest.display());
        return false;
    }

    info!("rsync {} -> {}", src.display(), dest.display());
    match Command::new("rsync").args(rsync_args(src, dest)).status().await {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!("rsync exited with {status}");
            false
        }
        Err(e) => {
            warn!("failed to run rsync: {e}");
            false
        }
    }
}

//! Torch placement at a single cell, and the bounded vertical search
//! around it.

use rwa_rcon::Console;
use tracing::trace;

use crate::config::TorchingConfig;
use crate::error::BotError;
use crate::query::{BLOCK_CHANGED, TEST_PASSED};

const AIR_BLOCK: &str = "minecraft:air";

/// Outcome of one placement attempt at one cell.
///
/// The two failure variants tell the vertical search which way the
/// walkable surface lies from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A torch is at the cell, either pre-existing or just placed.
    Placed,
    /// The cell is occupied by something solid; the surface is above.
    SearchUp,
    /// The cell is air with no ground below it; the surface is below.
    SearchDown,
}

/// Whether `(x, y, z)` rests on walkable ground, i.e. the block directly
/// below is the configured ground block. Read-only.
pub async fn on_ground<C: Console>(
    console: &mut C,
    cfg: &TorchingConfig,
    world: &str,
    x: i32,
    y: i32,
    z: i32,
) -> Result<bool, BotError> {
    let res = console
        .command(&format!(
            "execute in {world} if block {x} {below} {z} {ground}",
            below = y - 1,
            ground = cfg.ground_block,
        ))
        .await?;
    Ok(res == TEST_PASSED)
}

/// Ensure a torch exists at `(x, y, z)`, issuing at most one mutating
/// command.
///
/// Decision order: an existing torch is an idempotent success; a
/// ground-cover block is replaced in one conditional setblock; an air
/// cell gets a torch only if the block below is walkable ground,
/// otherwise the surface must be further down; anything else is solid
/// and the surface must be further up.
pub async fn place_torch<C: Console>(
    console: &mut C,
    cfg: &TorchingConfig,
    world: &str,
    x: i32,
    y: i32,
    z: i32,
) -> Result<Placement, BotError> {
    let torch = &cfg.torch_block;

    let res = console
        .command(&format!("execute in {world} if block {x} {y} {z} {torch}"))
        .await?;
    if res == TEST_PASSED {
        return Ok(Placement::Placed);
    }

    let res = console
        .command(&format!(
            "execute in {world} if block {x} {y} {z} {cover} run setblock {x} {y} {z} {torch}",
            cover = cfg.cover_block,
        ))
        .await?;
    if res.starts_with(BLOCK_CHANGED) {
        return Ok(Placement::Placed);
    }

    let res = console
        .command(&format!("execute in {world} if block {x} {y} {z} {AIR_BLOCK}"))
        .await?;
    if res == TEST_PASSED {
        let res = console
            .command(&format!(
                "execute in {world} if block {x} {below} {z} {ground} run setblock {x} {y} {z} {torch}",
                below = y - 1,
                ground = cfg.ground_block,
            ))
            .await?;
        if res.starts_with(BLOCK_CHANGED) {
            Ok(Placement::Placed)
        } else {
            Ok(Placement::SearchDown)
        }
    } else {
        Ok(Placement::SearchUp)
    }
}

/// Try to place a torch at `(x, y, z)`, then walk up to
/// `cfg.search_depth` cells strictly up or down, direction fixed by the
/// first failed attempt. Returns false when the search is exhausted.
pub async fn search_and_place<C: Console>(
    console: &mut C,
    cfg: &TorchingConfig,
    world: &str,
    x: i32,
    y: i32,
    z: i32,
) -> Result<bool, BotError> {
    let step = match place_torch(console, cfg, world, x, y, z).await? {
        Placement::Placed => return Ok(true),
        Placement::SearchUp => 1,
        Placement::SearchDown => -1,
    };

    for dy in 1..=cfg.search_depth {
        let probe_y = y + step * dy;
        trace!(x, z, probe_y, "probing for surface");
        if place_torch(console, cfg, world, x, probe_y, z).await? == Placement::Placed {
            return Ok(true);
        }
    }
    Ok(false)
}

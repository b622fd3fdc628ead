//! The polling loop that keeps the player's surroundings lit.

use rwa_rcon::{Console, Ticker};
use tracing::{debug, info, warn};

use crate::config::TorchingConfig;
use crate::error::BotError;
use crate::query::{self, Position};
use crate::{grid, placer};

/// One player's torch patrol.
///
/// Holds the previous tick's position explicitly; `None` until the first
/// successful read, so the first read always counts as movement.
pub struct Patrol<C: Console> {
    console: C,
    cfg: TorchingConfig,
    last_pos: Option<Position>,
}

impl<C: Console> Patrol<C> {
    pub fn new(console: C, cfg: TorchingConfig) -> Self {
        Self {
            console,
            cfg,
            last_pos: None,
        }
    }

    /// Poll forever. Returns only on a fatal error; the player entity
    /// disappearing ends the run rather than being retried.
    pub async fn run(&mut self, ticker: &mut impl Ticker) -> Result<(), BotError> {
        info!(
            grid_spacing = self.cfg.grid_spacing,
            half_width = self.cfg.half_width,
            search_depth = self.cfg.search_depth,
            "torch patrol started"
        );
        loop {
            ticker.wait().await;
            self.tick().await?;
        }
    }

    /// One polling tick: held-item gate, movement gate, ground gate, then
    /// a placement attempt per lattice candidate.
    pub async fn tick(&mut self) -> Result<(), BotError> {
        let held = query::held_item(&mut self.console).await?;
        if held.as_deref() != Some(self.cfg.torch_item.as_str()) {
            return Ok(());
        }

        let pos = query::position(&mut self.console).await?;
        let moved = self.last_pos != Some(pos);
        self.last_pos = Some(pos);
        if !moved {
            return Ok(());
        }

        let world = query::dimension(&mut self.console).await?;
        let (x, y, z) = pos.cell();
        if !placer::on_ground(&mut self.console, &self.cfg, &world, x, y, z).await? {
            // player is airborne or on odd footing, try again next tick
            return Ok(());
        }

        let candidates = grid::lattice(pos.x, pos.z, self.cfg.grid_spacing, self.cfg.half_width);
        let mut exhausted = 0usize;
        for (cx, cz) in candidates {
            let placed =
                placer::search_and_place(&mut self.console, &self.cfg, &world, cx, y, cz).await?;
            if !placed {
                debug!(cx, y, cz, "no placeable surface within search depth");
                exhausted += 1;
            }
        }
        if exhausted > 0 {
            // repeated exhaustion usually means spacing smaller than the
            // local terrain variation
            warn!(exhausted, "gave up on {exhausted} candidate columns this tick");
        }
        Ok(())
    }
}

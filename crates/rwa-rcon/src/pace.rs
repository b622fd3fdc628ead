//! Pacing for blocking command sequences.

use std::time::Duration;

use async_trait::async_trait;

/// The wait between steps of a command sequence. Injectable so tests can
/// drive loops and countdowns without real time passing.
#[async_trait]
pub trait Ticker: Send {
    async fn wait(&mut self);
}

/// Sleeps a fixed interval on every wait.
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn wait(&mut self) {
        tokio::time::sleep(self.interval).await;
    }
}

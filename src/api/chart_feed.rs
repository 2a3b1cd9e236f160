use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartEngine;

/// Mutation produced off the UI thread and applied by the chart's owner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartUpdate {
    Point { x: f64, y: f64 },
    Value(f64),
    XRange { min: f64, max: f64 },
    YRange { min: f64, max: f64 },
}

/// Producer half of a [`ChartFeed`]. Cloneable and `Send`.
#[derive(Debug, Clone)]
pub struct ChartFeedSender {
    sender: SyncSender<ChartUpdate>,
}

impl ChartFeedSender {
    /// Blocks while the feed is full.
    pub fn send(&self, update: ChartUpdate) -> ChartResult<()> {
        self.sender
            .send(update)
            .map_err(|_| ChartError::FeedClosed)
    }

    pub fn try_send(&self, update: ChartUpdate) -> ChartResult<()> {
        self.sender.try_send(update).map_err(|err| match err {
            TrySendError::Full(_) => ChartError::FeedFull,
            TrySendError::Disconnected(_) => ChartError::FeedClosed,
        })
    }
}

/// Bounded hand-off from producer threads to the thread owning the engine.
#[derive(Debug)]
pub struct ChartFeed {
    receiver: Receiver<ChartUpdate>,
}

impl ChartFeed {
    /// Creates a feed holding at most `capacity` pending updates (minimum 1).
    #[must_use]
    pub fn bounded(capacity: usize) -> (ChartFeedSender, Self) {
        let (sender, receiver) = mpsc::sync_channel(capacity.max(1));
        (ChartFeedSender { sender }, Self { receiver })
    }

    /// Applies every pending update to `engine` without blocking.
    ///
    /// Returns how many updates were applied; rejected updates are logged
    /// and skipped.
    pub fn drain_into<R: Renderer>(&self, engine: &mut ChartEngine<R>) -> usize {
        let mut applied = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(update) => match engine.apply_update(update) {
                    Ok(()) => applied += 1,
                    Err(err) => warn!(?update, %err, "dropped chart update"),
                },
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        if applied > 0 {
            debug!(applied, "chart feed drained");
        }
        applied
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn apply_update(&mut self, update: ChartUpdate) -> ChartResult<()> {
        match update {
            ChartUpdate::Point { x, y } => {
                self.plot_point(x, y);
                Ok(())
            }
            ChartUpdate::Value(value) => self.set_value(value),
            ChartUpdate::XRange { min, max } => self.set_x_range(min, max),
            ChartUpdate::YRange { min, max } => self.set_y_range(min, max),
        }
    }
}

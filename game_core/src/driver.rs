//! Host-independent frame loop
//!
//! Browser hosts drive frames from `requestAnimationFrame` and only share the
//! [`StopHandle`]; native hosts can use [`LoopDriver`] directly and pace frames
//! inside the render callback.

use crate::{Match, Snapshot};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable flag that asks a running loop to stop before its next frame
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Runs tick-then-render until stopped or the frame limit is reached
#[derive(Debug, Clone, Default)]
pub struct LoopDriver {
    stop: StopHandle,
    frame_limit: Option<u64>,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run frames, returning how many ran
    pub fn run<F>(&self, game: &mut Match, mut render: F) -> u64
    where
        F: FnMut(&Snapshot),
    {
        log::info!("loop started (frame limit {:?})", self.frame_limit);
        let mut frames = 0;
        loop {
            if self.stop.is_stopped() {
                break;
            }
            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                break;
            }

            game.tick();
            match game.snapshot() {
                Some(snapshot) => render(&snapshot),
                None => log::warn!("frame {} has no complete snapshot", game.tick),
            }
            frames += 1;
        }
        log::info!(
            "loop stopped after {frames} frames, score {}-{}",
            game.score.player,
            game.score.opponent
        );
        frames
    }
}

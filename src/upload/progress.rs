use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::types::UploadEvent;

pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const TICK_STEP: u8 = 5;
pub const TICK_CEILING: u8 = 95;

/// Simulated progress while the real request is in flight: +5 points every
/// 150 ms, capped at 95 so the bar never shows completion before the
/// response settles. Stops on its own at the cap; settlement cancels it via
/// the token (idempotent, so settling twice is harmless).
pub fn spawn_ticker(events: Sender<UploadEvent>, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut progress = 0u8;
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick completes immediately; consume it so the first
        // reported value lands a full interval after submit.
        interval.tick().await;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    progress = next_progress(progress);
                    if events.send(UploadEvent::Progress(progress)).is_err() {
                        break;
                    }
                    if progress >= TICK_CEILING {
                        break;
                    }
                }
            }
        }
    })
}

fn next_progress(progress: u8) -> u8 {
    progress.saturating_add(TICK_STEP).min(TICK_CEILING)
}

//! Fake log ticker.
//!
//! Emits one generated log line right away, then another after each random
//! pause, until the token is cancelled or the inbox closes.

use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use treader_core::FakeLogGenerator;

use super::inbox::UiEventSender;
use crate::events::UiEvent;

/// Bounds for the pause between two lines.
#[derive(Debug, Clone, Copy)]
pub struct TickerInterval {
    pub min: Duration,
    pub max: Duration,
}

/// Spawns the ticker on the current tokio runtime.
pub fn spawn_ticker<R>(
    mut generator: FakeLogGenerator<R>,
    interval: TickerInterval,
    tx: UiEventSender,
    cancel: CancellationToken,
) -> JoinHandle<()>
where
    R: Rng + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            if tx.send(UiEvent::FakeLine(generator.next_line())).is_err() {
                debug!("inbox closed, ticker stopping");
                break;
            }
            let pause = generator.next_interval(interval.min, interval.max);
            tokio::select! {
                () = cancel.cancelled() => break,
                () = tokio::time::sleep(pause) => {}
            }
        }
    })
}

//! refresh.rs
//!
//! Background polling of the persisted schedule.
//!
//! The scheduling screen stays open for a while; this task re-fetches one
//! room's showtimes for one date on a fixed interval and publishes each
//! result on a watch channel. Consumers always read the latest snapshot and
//! the task dies cleanly when its cancellation token fires.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::backend_client::BackendClient;
use crate::models::Showtime;

/// One poll result. `fetched_at` lets the UI show how stale its view is.
#[derive(Debug, Clone)]
pub struct ScheduleSnapshot {
    pub room_id: i64,
    pub show_date: NaiveDate,
    pub showtimes: Vec<Showtime>,
    pub fetched_at: DateTime<Utc>,
}

/// Owner's handle to a running refresher.
pub struct RefreshHandle {
    snapshots: watch::Receiver<ScheduleSnapshot>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// A fresh receiver; `changed().await` wakes on every successful poll.
    pub fn snapshots(&self) -> watch::Receiver<ScheduleSnapshot> {
        self.snapshots.clone()
    }

    pub fn latest(&self) -> ScheduleSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Cancels the task and waits for it to wind down.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

/// Starts polling `room_id`'s schedule for `show_date`. The first fetch
/// happens immediately, then every `interval`. Until it lands, the channel
/// holds an empty snapshot.
pub fn spawn_refresher(
    client: BackendClient,
    room_id: i64,
    show_date: NaiveDate,
    interval: Duration,
) -> RefreshHandle {
    let (tx, rx) = watch::channel(ScheduleSnapshot {
        room_id,
        show_date,
        showtimes: Vec::new(),
        fetched_at: Utc::now(),
    });
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let task = tokio::spawn(async move {
        run(client, room_id, show_date, interval, tx, token).await;
    });

    RefreshHandle {
        snapshots: rx,
        cancel,
        task,
    }
}

async fn run(
    client: BackendClient,
    room_id: i64,
    show_date: NaiveDate,
    interval: Duration,
    tx: watch::Sender<ScheduleSnapshot>,
    cancel: CancellationToken,
) {
    info!(
        "📅 Showtime refresh started for room {} on {} (every {:?})",
        room_id, show_date, interval
    );
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("📅 Showtime refresh stopped for room {}", room_id);
                break;
            }
            _ = ticker.tick() => {
                match client.list_showtimes(room_id, show_date).await {
                    Ok(showtimes) => {
                        debug!(
                            "📅 Refreshed {} showtimes for room {} on {}",
                            showtimes.len(),
                            room_id,
                            show_date
                        );
                        let _ = tx.send(ScheduleSnapshot {
                            room_id,
                            show_date,
                            showtimes,
                            fetched_at: Utc::now(),
                        });
                    }
                    // keep publishing the last good snapshot until the
                    // backend answers again
                    Err(e) => {
                        error!("Failed to refresh showtimes for room {}: {:?}", room_id, e);
                    }
                }
            }
        }
    }
}

// ABOUTME: Background polling of the movie service's flag status and health endpoints
// Drives maintenance mode and the connection indicator; failures are logged, never toasted

use crate::api::MoviesClient;
use crate::models::{FlagStatus, ServiceHealth};
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Result of one status poll. `None` means that request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub flags: Option<FlagStatus>,
    pub health: Option<ServiceHealth>,
    pub checked_at: DateTime<Local>,
}

/// Fetches `/flags/status` and `/health` concurrently.
pub async fn poll_once(client: &MoviesClient) -> StatusUpdate {
    let (flags, health) = tokio::join!(client.flag_status(), client.health());

    let flags = flags
        .map_err(|e| warn!("Failed to fetch feature flag status: {}", e))
        .ok();
    let health = health.map_err(|e| warn!("Health check failed: {}", e)).ok();

    StatusUpdate {
        flags,
        health,
        checked_at: Local::now(),
    }
}

pub struct StatusPoller;

impl StatusPoller {
    /// Polls immediately, then every `interval`, until the receiver is dropped
    /// or the returned task is aborted.
    pub fn spawn(client: MoviesClient, interval: Duration) -> (JoinHandle<()>, mpsc::Receiver<StatusUpdate>) {
        let (tx, rx) = mpsc::channel(8);

        let handle = tokio::spawn(async move {
            info!("Status poller started for {} every {:?}", client.base_url(), interval);
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let update = poll_once(&client).await;
                debug!(
                    "Status poll: maintenance={:?} healthy={:?}",
                    update.flags.map(|f| f.maintenance_mode),
                    update.health.as_ref().map(ServiceHealth::is_up)
                );
                if tx.send(update).await.is_err() {
                    debug!("Status receiver dropped, stopping poller");
                    break;
                }
            }
        });

        (handle, rx)
    }
}

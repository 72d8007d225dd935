// ABOUTME: Tests for the background status poller feeding maintenance mode and health

mod common;

use common::MockServer;
use flagdeck::api::MoviesClient;
use flagdeck::app::{poll_once, StatusPoller};
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

fn client(server: &MockServer) -> MoviesClient {
    MoviesClient::new(&server.api_url(), Duration::from_secs(2)).unwrap()
}

fn status(maintenance: bool) -> serde_json::Value {
    json!({"darkMode": false, "maintenanceMode": maintenance})
}

#[tokio::test]
async fn test_poll_once_reads_status_and_health() {
    let server = MockServer::start().await;
    server.route_json("GET", "/flags/status", 200, &status(true));
    server.route_json("GET", "/health", 200, &json!({"status": "DOWN", "maintenanceMode": true}));

    let update = poll_once(&client(&server)).await;

    assert!(update.flags.unwrap().maintenance_mode);
    assert!(!update.health.unwrap().is_up());
}

#[tokio::test]
async fn test_poll_once_tolerates_failures() {
    let server = MockServer::start().await;
    server.route("GET", "/flags/status", 500, "");

    let update = poll_once(&client(&server)).await;

    assert!(update.flags.is_none());
    assert!(update.health.is_none());
}

#[tokio::test]
async fn test_poller_reports_changes_on_each_interval() {
    let server = MockServer::start().await;
    server.route_json("GET", "/flags/status", 200, &status(false));
    server.route_json("GET", "/health", 200, &json!({"status": "UP"}));

    let (handle, mut rx) = StatusPoller::spawn(client(&server), Duration::from_millis(50));

    let first = timeout(Duration::from_secs(2), rx.recv()).await.unwrap().unwrap();
    assert!(!first.flags.unwrap().maintenance_mode);

    server.route_json("GET", "/flags/status", 200, &status(true));
    let mut entered = false;
    for _ in 0..10 {
        let update = timeout(Duration::from_secs(2), rx.recv()).await.unwrap().unwrap();
        if update.flags.is_some_and(|f| f.maintenance_mode) {
            entered = true;
            break;
        }
    }
    assert!(entered, "poller never reported maintenance mode");

    // Dropping the receiver stops the task
    drop(rx);
    timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
}

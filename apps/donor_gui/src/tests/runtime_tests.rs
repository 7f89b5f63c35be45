use super::*;

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use crossbeam_channel::bounded;
use shared::domain::{BloodGroup, Donor, DonorId};
use tokio::net::TcpListener;

const EVENT_TIMEOUT: Duration = Duration::from_secs(10);

async fn spawn_directory(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/users")
}

fn next_load_outcome(ui_rx: &Receiver<UiEvent>) -> Result<Vec<Donor>, FetchFailure> {
    loop {
        match ui_rx.recv_timeout(EVENT_TIMEOUT).expect("backend event") {
            UiEvent::Info(_) => continue,
            UiEvent::DonorsLoaded(outcome) => return outcome,
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn worker_fetches_and_reports_donors() {
    let endpoint = spawn_directory(Router::new().route(
        "/users",
        get(|| async {
            Json(serde_json::json!([
                { "id": 1, "name": "Alice", "address": { "city": "Pune" } },
                { "id": 4, "name": "Dev", "address": { "city": "Delhi" } }
            ]))
        }),
    ))
    .await;

    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(16);
    let worker = launch(cmd_rx, ui_tx, endpoint);
    cmd_tx.send(BackendCommand::LoadDonors).expect("queue load");

    let outcome = tokio::task::spawn_blocking(move || next_load_outcome(&ui_rx))
        .await
        .expect("join receiver");
    let donors = outcome.expect("donors");

    assert_eq!(donors.len(), 2);
    assert_eq!(donors[0].id, DonorId(1));
    assert_eq!(donors[0].blood_group, BloodGroup::ANegative);
    assert_eq!(donors[1].city, "Delhi");
    assert_eq!(donors[1].blood_group, BloodGroup::OPositive);
    assert!(donors.iter().all(|d| !d.request_sent));

    drop(cmd_tx);
    tokio::task::spawn_blocking(move || worker.join())
        .await
        .expect("join worker task")
        .expect("worker thread");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn worker_reports_fetch_failure() {
    let endpoint = spawn_directory(Router::new().route(
        "/users",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;

    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(16);
    let _worker = launch(cmd_rx, ui_tx, endpoint);
    cmd_tx.send(BackendCommand::LoadDonors).expect("queue load");

    let outcome = tokio::task::spawn_blocking(move || next_load_outcome(&ui_rx))
        .await
        .expect("join receiver");
    assert!(matches!(outcome, Err(FetchFailure::Status { status: 503 })));
}

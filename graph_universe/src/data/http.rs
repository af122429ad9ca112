//! HTTP graph fetcher: dedicated thread + reqwest → GraphEvent.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;

use crate::data::model::{GraphEvent, GraphSnapshot};
use crate::data::{FetchConfig, GraphFetcher};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid graph body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Polls a JSON graph endpoint on a fixed interval.
pub struct HttpFetcher;

impl GraphFetcher for HttpFetcher {
    fn spawn(config: FetchConfig) -> Receiver<GraphEvent> {
        let (tx, rx) = crossbeam_channel::bounded(16);
        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(err) => {
                    eprintln!("cosmos: failed to build tokio runtime: {err}");
                    return;
                }
            };
            rt.block_on(fetch_loop(config, tx));
        });
        rx
    }
}

/// Fetch once at startup, then every poll interval. A failed attempt is
/// reported on the channel and recovery waits for the next tick; there is no
/// immediate retry.
async fn fetch_loop(config: FetchConfig, tx: Sender<GraphEvent>) {
    let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("cosmos: failed to build http client: {err}");
            return;
        }
    };

    eprintln!("cosmos: polling {}", config.endpoint);

    loop {
        let event = match fetch_snapshot(&client, &config).await {
            Ok(snapshot) => {
                eprintln!(
                    "cosmos: graph snapshot ({} nodes, {} edges)",
                    snapshot.nodes.len(),
                    snapshot.edges.len()
                );
                GraphEvent::Snapshot(snapshot)
            }
            Err(err) => {
                eprintln!("cosmos: fetch failed: {err}");
                GraphEvent::Failed(err.to_string())
            }
        };

        if tx.send(event).is_err() {
            // Receiver dropped; the app is gone.
            return;
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

async fn fetch_snapshot(
    client: &reqwest::Client,
    config: &FetchConfig,
) -> Result<GraphSnapshot, FetchError> {
    let response = client
        .get(config.endpoint.clone())
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

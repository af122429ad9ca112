use std::path::Path;

use crossbeam_channel::Receiver;

use crate::data::http::HttpFetcher;
use crate::data::model::{GraphEvent, GraphSnapshot};
use crate::data::{FetchConfig, GraphFetcher};

/// Bevy resource holding the channel from the fetcher thread.
/// Systems drain this in ingest_graph.
#[derive(bevy::prelude::Resource)]
pub struct GraphChannel(pub Receiver<GraphEvent>);

/// Create a graph channel and spawn the HTTP fetcher on a dedicated thread.
pub fn init_graph_channel(config: FetchConfig) -> GraphChannel {
    GraphChannel(HttpFetcher::spawn(config))
}

/// Create a graph channel that replays pre-recorded snapshots from a JSON
/// fixture file (a top-level array of snapshots). Snapshots are sent with a
/// delay between each to simulate the live polling cadence.
pub fn init_fixture_channel(path: &Path) -> GraphChannel {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    let snapshots: Vec<GraphSnapshot> = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()));

    let (tx, rx) = crossbeam_channel::bounded(16);

    std::thread::spawn(move || {
        for snapshot in snapshots {
            if tx.send(GraphEvent::Snapshot(snapshot)).is_err() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(1500));
        }
    });

    GraphChannel(rx)
}

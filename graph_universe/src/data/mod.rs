mod channel;
pub mod http;
mod model;

use crossbeam_channel::Receiver;
use url::Url;

pub use channel::{init_fixture_channel, init_graph_channel, GraphChannel};
pub use model::{GraphEdge, GraphEvent, GraphNode, GraphSnapshot};

/// Configuration for spawning a graph fetcher.
#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub endpoint: Url,
}

/// Interface for graph source fetchers.
pub trait GraphFetcher: Send + 'static {
    fn spawn(config: FetchConfig) -> Receiver<GraphEvent>;
}

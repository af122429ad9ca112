use std::time::Duration;

use graph_universe::{FetchConfig, GraphEvent, GraphFetcher, HttpFetcher};
use httpmock::prelude::*;

const RECV_TIMEOUT: Duration = Duration::from_secs(10);

fn fetch_config(server: &MockServer) -> FetchConfig {
    FetchConfig {
        endpoint: server.url("/api/graph").parse().unwrap(),
    }
}

#[test]
fn fetcher_delivers_a_snapshot() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/graph");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"nodes":[{"id":1,"name":"auth","group":"core"},{"id":2,"name":"billing"}],"edges":[{"a":1,"b":2}],"company_id":3,"ts":1754400000}"#);
    });

    let rx = HttpFetcher::spawn(fetch_config(&server));

    let event = rx
        .recv_timeout(RECV_TIMEOUT)
        .expect("should receive the startup fetch");

    match event {
        GraphEvent::Snapshot(snapshot) => {
            assert_eq!(snapshot.nodes.len(), 2);
            assert_eq!(snapshot.nodes[0].group.as_deref(), Some("core"));
            assert!(snapshot.nodes[1].group.is_none());
            assert_eq!(snapshot.edges.len(), 1);
        }
        GraphEvent::Failed(message) => panic!("unexpected failure: {message}"),
    }
}

#[test]
fn fetcher_sends_no_cache_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/graph")
            .header("cache-control", "no-cache");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"nodes":[],"edges":[]}"#);
    });

    let rx = HttpFetcher::spawn(fetch_config(&server));
    rx.recv_timeout(RECV_TIMEOUT).expect("should fetch");

    mock.assert();
}

#[test]
fn http_error_status_is_reported_with_the_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/graph");
        then.status(500);
    });

    let rx = HttpFetcher::spawn(fetch_config(&server));

    let event = rx
        .recv_timeout(RECV_TIMEOUT)
        .expect("failures must still arrive on the channel");

    match event {
        GraphEvent::Failed(message) => {
            assert!(message.contains("500"), "message was: {message}");
        }
        GraphEvent::Snapshot(_) => panic!("expected a failure event"),
    }
}

#[test]
fn transport_failure_is_reported() {
    // Nothing listens on port 9; the connection is refused immediately.
    let config = FetchConfig {
        endpoint: "http://127.0.0.1:9/api/graph".parse().unwrap(),
    };

    let rx = HttpFetcher::spawn(config);

    let event = rx.recv_timeout(RECV_TIMEOUT).expect("should report failure");
    assert!(matches!(event, GraphEvent::Failed(_)));
}

#[test]
fn undecodable_body_is_a_failure_not_a_panic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/graph");
        then.status(200)
            .header("content-type", "application/json")
            .body("not json");
    });

    let rx = HttpFetcher::spawn(fetch_config(&server));

    let event = rx.recv_timeout(RECV_TIMEOUT).expect("should report failure");
    match event {
        GraphEvent::Failed(message) => assert!(message.contains("invalid graph body")),
        GraphEvent::Snapshot(_) => panic!("expected a failure event"),
    }
}

//! Env parsing for the graph endpoint and fixture replay.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::data::FetchConfig;

pub const GRAPH_URL_ENV: &str = "GRAPH_URL";
pub const GRAPH_FIXTURE_ENV: &str = "GRAPH_FIXTURE";

/// Startup configuration failures. Fatal: the caller reports the message and
/// nothing further runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GRAPH_URL is not set; point it at a graph endpoint, e.g. http://127.0.0.1:5000/api/graph")]
    MissingEndpoint,
    #[error("invalid URL in GRAPH_URL ({raw:?}): {source}")]
    InvalidEndpoint {
        raw: String,
        source: url::ParseError,
    },
}

/// Returns the fetch config from the GRAPH_URL env var.
pub fn graph_endpoint() -> Result<FetchConfig, ConfigError> {
    let raw = std::env::var(GRAPH_URL_ENV).map_err(|_| ConfigError::MissingEndpoint)?;
    let endpoint = raw
        .parse::<Url>()
        .map_err(|source| ConfigError::InvalidEndpoint {
            raw: raw.clone(),
            source,
        })?;
    Ok(FetchConfig { endpoint })
}

/// Optional fixture file replacing the live endpoint (GRAPH_FIXTURE).
pub fn fixture_path() -> Option<PathBuf> {
    std::env::var(GRAPH_FIXTURE_ENV).ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 2] = [GRAPH_URL_ENV, GRAPH_FIXTURE_ENV];

    #[test]
    fn graph_url_is_parsed() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(GRAPH_URL_ENV, "http://127.0.0.1:5000/api/graph");

        let config = graph_endpoint().unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:5000/api/graph");
    }

    #[test]
    fn missing_graph_url_is_a_config_error() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::remove_var(GRAPH_URL_ENV);

        assert!(matches!(graph_endpoint(), Err(ConfigError::MissingEndpoint)));
    }

    #[test]
    fn invalid_graph_url_is_a_config_error() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(GRAPH_URL_ENV, "not-a-url");

        assert!(matches!(
            graph_endpoint(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn fixture_path_is_optional() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::remove_var(GRAPH_FIXTURE_ENV);
        assert!(fixture_path().is_none());

        std::env::set_var(GRAPH_FIXTURE_ENV, "fixtures/demo.json");
        assert_eq!(fixture_path(), Some(PathBuf::from("fixtures/demo.json")));
    }
}

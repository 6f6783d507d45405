// src/config.rs
// =============================================================================
// This module holds every fixed value the acceptance test depends on.
//
// Hosts, the branch name and the validator endpoint all live in one struct
// so tests can point the pipeline at a local mock server instead of the
// real websites.
//
// Configuration layers:
// 1. Config::default()   - the production door43 endpoints
// 2. Config::from_env()  - environment variables override a few fields
//
// Rust concepts:
// - Default trait: A standard way to build a "normal" value
// - Closures: from_lookup() takes a function to read variables
// - Duration: Type-safe time spans from std::time
// =============================================================================

use log::{debug, warn};
use std::time::Duration;

/// Environment variable overriding the per-request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "DOOR43_ACCEPTANCE_TIMEOUT_SECS";
/// Environment variable overriding the publishing host.
pub const PUBLISH_HOST_ENV: &str = "DOOR43_ACCEPTANCE_PUBLISH_HOST";
/// Environment variable overriding the HTML validator endpoint.
pub const VALIDATOR_URL_ENV: &str = "DOOR43_ACCEPTANCE_VALIDATOR_URL";

// Everything the pipeline needs to know about the outside world
#[derive(Debug, Clone)]
pub struct Config {
    /// Substring every supported repository URL must contain
    pub host_marker: String,
    /// Exact scheme + host prefix a repository URL must start with
    pub repo_prefix: String,
    /// Branch whose commit history is scraped
    pub branch: String,
    /// `id` attribute of the commits table on the listing page
    pub commits_table_id: String,
    /// Host serving the rendered output, `<host>/u/<owner>/<repo>/<sha>`
    pub publish_host: String,
    /// HTML validation service (validator.nu compatible)
    pub validator_endpoint: String,
    /// Upper bound on every single fetch
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_marker: "git.door43.org".to_string(),
            repo_prefix: "https://git.door43.org/".to_string(),
            branch: "master".to_string(),
            commits_table_id: "commits-table".to_string(),
            publish_host: "https://live.door43.org".to_string(),
            validator_endpoint: "https://validator.nu/".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    // Builds the configuration from the real process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds the configuration from any key -> value lookup
    //
    // Parameters:
    //   lookup: returns Some(value) if the variable is set
    //
    // Values that cannot be used (empty strings, a timeout of "abc" or 0)
    // are skipped with a warning so a typo never breaks the run.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring {}={:?}: expected a positive number of seconds", TIMEOUT_ENV, raw),
            }
        }

        if let Some(host) = non_empty(lookup(PUBLISH_HOST_ENV)) {
            config.publish_host = host;
        }

        if let Some(endpoint) = non_empty(lookup(VALIDATOR_URL_ENV)) {
            config.validator_endpoint = endpoint;
        }

        debug!("Using configuration: {:?}", config);
        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_point_at_door43() {
        let config = Config::default();
        assert_eq!(config.repo_prefix, "https://git.door43.org/");
        assert_eq!(config.branch, "master");
        assert_eq!(config.publish_host, "https://live.door43.org");
        assert_eq!(config.validator_endpoint, "https://validator.nu/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (TIMEOUT_ENV, "5"),
            (PUBLISH_HOST_ENV, "http://localhost:8080"),
            (VALIDATOR_URL_ENV, "http://localhost:8888/"),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.publish_host, "http://localhost:8080");
        assert_eq!(config.validator_endpoint, "http://localhost:8888/");
        // Not overridable
        assert_eq!(config.branch, "master");
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            (TIMEOUT_ENV, "soon"),
            (PUBLISH_HOST_ENV, "   "),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.publish_host, "https://live.door43.org");

        let zero = Config::from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")]));
        assert_eq!(zero.timeout, Duration::from_secs(30));
    }
}

// src/test_support.rs
// Shared helpers for tests that talk to a mockito server.

use crate::config::Config;
use std::time::Duration;

// Points every external endpoint at one local mock server:
//   <server>/<owner>/<repo>/commits/master   commit listing
//   <server>/u/<owner>/<repo>/<sha>          published page
//   <server>/validate?...                    HTML validator
pub fn config_for(server_url: &str) -> Config {
    Config {
        host_marker: server_url.trim_start_matches("http://").to_string(),
        repo_prefix: format!("{}/", server_url),
        publish_host: server_url.to_string(),
        validator_endpoint: format!("{}/validate", server_url),
        timeout: Duration::from_secs(5),
        ..Config::default()
    }
}

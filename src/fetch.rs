// src/fetch.rs
// =============================================================================
// This module makes the HTTP requests for every pipeline stage.
//
// Key functionality:
// - One shared reqwest Client with a timeout and a User-Agent
// - get_text(): download a page body (commit listing, validator JSON)
// - probe(): check that a page exists without keeping its body
// - join_url(): glue URL parts together without doubled slashes
//
// Every request is a plain GET. Nothing is retried: a failed fetch is
// reported once and the stage that asked for it decides what happens next.
//
// Rust concepts:
// - async/await: Network calls suspend until the response arrives
// - Result<T, E>: Errors are returned, never panicked on
// =============================================================================

use crate::config::Config;
use log::debug;
use reqwest::Client;

// Thin wrapper around a configured HTTP client
//
// The Client keeps a connection pool, so we build it once per run and
// hand out references to it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Creates a client honoring the configured timeout and user agent
    //
    // Building can only fail if the TLS backend cannot be initialized,
    // which is a setup problem rather than a test failure.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    // Downloads a page and returns its body as text
    //
    // Non-2xx responses are turned into errors with error_for_status(),
    // so callers see "HTTP status client error (404 Not Found) for url (...)".
    pub async fn get_text(&self, url: &str) -> reqwest::Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("{} answered {}", url, response.status());
        response.text().await
    }

    // Checks that a URL can be opened; the body is discarded
    pub async fn probe(&self, url: &str) -> reqwest::Result<()> {
        debug!("GET {} (existence check)", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("{} answered {}", url, response.status());
        Ok(())
    }
}

// Joins a base URL and path parts with single slashes
//
// Example:
//   join_url("https://live.door43.org/", &["u", "owner/", "repo"])
//   -> "https://live.door43.org/u/owner/repo"
pub fn join_url(base: &str, parts: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in parts {
        let part = part.trim_matches('/');
        if part.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(part);
    }
    url
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why error_for_status()?
//    - reqwest only fails on transport problems (DNS, TLS, timeouts)
//    - A 404 page is still a "successful" HTTP exchange to reqwest
//    - error_for_status() turns 4xx/5xx responses into errors as well
//
// 2. Why return reqwest::Result instead of StageError?
//    - The fetcher doesn't know which stage is calling it
//    - Each stage wraps the error in the StageError variant that
//      describes its own failure (Network, NotPublished, ...)
// -----------------------------------------------------------------------------

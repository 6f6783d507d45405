// src/publish/exists.rs
// =============================================================================
// Verifies that <publish host>/u/<owner>/<repo>/<short sha> can be opened.
//
// Any successful response counts as "published". A transport failure or an
// HTTP error status (404 when the build never finished, 5xx when the host
// is down) stops the acceptance test with one error naming the URL.
// =============================================================================

use crate::commits::CommitInfo;
use crate::config::Config;
use crate::error::StageError;
use crate::fetch::{join_url, Fetcher};
use crate::repo::RepositoryRef;

/// Where the rendered output of `commit` is expected to be served.
pub fn published_url(config: &Config, repo: &RepositoryRef, commit: &CommitInfo) -> String {
    join_url(
        &config.publish_host,
        &["u", repo.owner.as_str(), repo.name.as_str(), commit.short_id.as_str()],
    )
}

// Checks that the published page exists
//
// Returns: the published URL, so the validator can be pointed at it
pub async fn check_published(
    fetcher: &Fetcher,
    config: &Config,
    repo: &RepositoryRef,
    commit: &CommitInfo,
) -> Result<String, StageError> {
    let url = published_url(config, repo, commit);

    match fetcher.probe(&url).await {
        Ok(()) => Ok(url),
        Err(e) => Err(StageError::NotPublished {
            reason: e.to_string(),
            url,
        }),
    }
}

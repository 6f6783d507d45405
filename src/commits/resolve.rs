// src/commits/resolve.rs
// =============================================================================
// Downloads the commit listing page of a repository and extracts the newest
// commit from it.
//
// The page lives at <repo url>/commits/<branch>. The branch comes from the
// configuration and defaults to "master".
// =============================================================================

use super::extract::{extract_latest_commit, CommitInfo};
use crate::config::Config;
use crate::error::StageError;
use crate::fetch::{join_url, Fetcher};
use crate::repo::RepositoryRef;
use log::debug;
use scraper::Html;

/// URL of the commit history page for the configured branch.
pub fn commits_url(repo: &RepositoryRef, config: &Config) -> String {
    join_url(&repo.url, &["commits", config.branch.as_str()])
}

// Finds the most recent commit of a repository
//
// Parameters:
//   fetcher: shared HTTP client
//   config: supplies the branch and the commits table id
//   repo: the repository found by the locator
//
// Returns: CommitInfo, or a Network / Extraction StageError
pub async fn resolve_latest_commit(
    fetcher: &Fetcher,
    config: &Config,
    repo: &RepositoryRef,
) -> Result<CommitInfo, StageError> {
    let url = commits_url(repo, config);

    let html = fetcher
        .get_text(&url)
        .await
        .map_err(|e| StageError::Network {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    let document = Html::parse_document(&html);
    let commit = extract_latest_commit(&document, &config.commits_table_id).map_err(|kind| {
        StageError::Extraction {
            url: repo.url.clone(),
            kind,
        }
    })?;

    debug!("Latest commit of {}/{} is {}", repo.owner, repo.name, commit.short_id);
    Ok(commit)
}

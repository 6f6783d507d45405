// src/repo/locate.rs
// =============================================================================
// Parses a repository URL such as https://git.door43.org/owner/repo into
// its owner and repository name.
//
// Strategy:
// - The URL must mention the supported host at all (friendlier message)
// - It must start with the exact https prefix
// - What follows must be exactly two non-empty path segments
//
// Rust concepts:
// - Iterator adapters: split + filter to drop empty segments
// - Slice patterns: match on [owner, name] to demand exactly two parts
// =============================================================================

use crate::config::Config;
use crate::error::StageError;
use crate::fetch::join_url;

// The repository the acceptance test checks
//
// Both fields are guaranteed non-empty by locate().
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
    /// Canonical base URL, `<prefix><owner>/<name>`
    pub url: String,
}

// Validates a repository URL and extracts owner and repository name
//
// Parameters:
//   url: the URL given on the command line
//   config: supplies the host marker and the required prefix
//
// Returns: RepositoryRef, or the StageError explaining what is wrong
//
// Example:
//   "https://git.door43.org/user/en_ulb/" -> owner "user", name "en_ulb"
pub fn locate(url: &str, config: &Config) -> Result<RepositoryRef, StageError> {
    if !url.contains(&config.host_marker) {
        return Err(StageError::UnsupportedHost {
            host: config.host_marker.clone(),
        });
    }

    let path = url
        .strip_prefix(&config.repo_prefix)
        .ok_or_else(|| StageError::MalformedUrl(url.to_string()))?;

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [owner, name] => Ok(RepositoryRef {
            owner: owner.to_string(),
            name: name.to_string(),
            url: join_url(&config.repo_prefix, &[*owner, *name]),
        }),
        _ => Err(StageError::UnknownOwnerRepo(url.to_string())),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does strip_prefix() return?
//    - Some(rest) if the string starts with the prefix, None otherwise
//    - .ok_or_else() turns that None into our error without allocating
//      the error when it isn't needed
//
// 2. What is segments.as_slice() with [owner, name]?
//    - A slice pattern that only matches when there are exactly two items
//    - Zero, one or three+ segments all fall through to the `_` arm
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_owner_and_repo() {
        let repo = locate("https://git.door43.org/tx-manager-test-data/en_ulb", &Config::default()).unwrap();
        assert_eq!(repo.owner, "tx-manager-test-data");
        assert_eq!(repo.name, "en_ulb");
        assert_eq!(repo.url, "https://git.door43.org/tx-manager-test-data/en_ulb");
    }

    #[test]
    fn test_locate_ignores_empty_segments() {
        let repo = locate("https://git.door43.org//owner//repo/", &Config::default()).unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_unsupported_host() {
        let err = locate("https://github.com/owner/repo", &Config::default()).unwrap_err();
        assert!(matches!(err, StageError::UnsupportedHost { .. }));
        assert!(err.to_string().contains("git.door43.org"));
    }

    #[test]
    fn test_wrong_scheme_is_malformed() {
        let err = locate("http://git.door43.org/owner/repo", &Config::default()).unwrap_err();
        assert_eq!(err, StageError::MalformedUrl("http://git.door43.org/owner/repo".to_string()));
    }

    #[test]
    fn test_wrong_segment_count() {
        for url in [
            "https://git.door43.org/",
            "https://git.door43.org/owner",
            "https://git.door43.org/owner/repo/src",
            "https://git.door43.org/owner/repo/commits/master",
        ] {
            let err = locate(url, &Config::default()).unwrap_err();
            assert_eq!(err, StageError::UnknownOwnerRepo(url.to_string()), "url: {}", url);
        }
    }
}

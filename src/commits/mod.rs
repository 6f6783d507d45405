// src/commits/mod.rs
// =============================================================================
// This module finds the most recent commit of a repository.
//
// Submodules:
// - extract: Pulls the short commit id out of a commit listing page
// - resolve: Downloads the listing page and runs the extraction
// =============================================================================

mod extract;
mod resolve;

pub use extract::CommitInfo;
pub use resolve::resolve_latest_commit;

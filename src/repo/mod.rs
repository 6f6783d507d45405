// src/repo/mod.rs
// =============================================================================
// This module works out which repository the acceptance test is about.
//
// Currently implements:
// - Checking the URL is on the supported host
// - Splitting the URL into owner and repository name
//
// No network access happens here: a bad URL is rejected before any
// request is made.
// =============================================================================

mod locate;

pub use locate::{locate, RepositoryRef};

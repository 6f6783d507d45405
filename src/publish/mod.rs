// src/publish/mod.rs
// =============================================================================
// This module checks that the rendered output of a commit was published.
//
// Only reachability is checked here; the content of the page is handed to
// the markup validator afterwards.
// =============================================================================

mod exists;

pub use exists::check_published;

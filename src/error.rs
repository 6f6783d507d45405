// src/error.rs
// =============================================================================
// Errors a pipeline stage can stop the acceptance test with.
//
// Each variant's Display text is exactly the line the user sees under
// "Acceptance test generated errors:", so the pipeline can record any
// failure with err.to_string().
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from #[error(...)]
// - Enums with data: Each failure carries the values needed to explain it
// =============================================================================

use thiserror::Error;

/// Why a stage could not finish.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// The URL is not on the supported host at all
    #[error("Only {host} repositories are supported.")]
    UnsupportedHost { host: String },

    /// The URL mentions the host but does not start with the expected prefix
    #[error("Invalid repository URL: {0}")]
    MalformedUrl(String),

    /// The path after the prefix is not exactly `<owner>/<repo>`
    #[error("Not able to determine user and project: {0}")]
    UnknownOwnerRepo(String),

    /// A page we need could not be downloaded
    #[error("Not able to load {url}, {reason}")]
    Network { url: String, reason: String },

    /// The commit listing page does not have the expected shape
    #[error("{kind} for {url}")]
    Extraction { url: String, kind: ExtractionError },

    /// The rendered output page is not reachable
    #[error("Not able to open {url}, {reason}")]
    NotPublished { url: String, reason: String },

    /// The validator answered with something that is not its JSON format
    #[error("Invalid response from the HTML validator {url}, {reason}")]
    BadValidatorResponse { url: String, reason: String },
}

/// What was missing from the commit listing page.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Commits table was not found")]
    MissingTable,

    #[error("Commit data was not found")]
    MissingRow,

    #[error("Commit id was not found")]
    MissingLink,
}

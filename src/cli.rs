// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The acceptance test takes a single required option, the repository URL:
//
//   door43-acceptance --gitrepo https://git.door43.org/owner/repo
//
// Endpoints and the request timeout are not flags; they come from
// Config::from_env() (see src/config.rs).
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Attributes: #[arg(...)] configures how each field is read
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "door43-acceptance",
    version,
    about = "Acceptance test for a door43 repository and its published HTML",
    long_about = "Checks that a repository on git.door43.org has a recent commit, that the \
                  rendered output of that commit is published on live.door43.org, and that \
                  the published HTML passes the validator.nu checks."
)]
pub struct Cli {
    /// Repository on git.door43.org where the Bible source can be found
    ///
    /// Example: https://git.door43.org/owner/en_ulb
    #[arg(short = 'r', long = "gitrepo", value_name = "URL")]
    pub gitrepo: String,
}

// src/main.rs
// =============================================================================
// This is the entry point of the acceptance test.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and load the configuration
// 3. Run the pipeline, collecting errors and warnings in a RunContext
// 4. Print the report
// 5. Exit with proper code (0 = passed, 1 = failed with errors, 2 = setup error)
//
// Warnings alone never fail the run: "passed with warnings" still exits 0.
// =============================================================================

mod cli;
mod commits;
mod config;
mod context;
mod error;
mod fetch;
mod markup;
mod pipeline;
mod publish;
mod report;
mod repo;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use context::RunContext;
use log::debug;
use pipeline::Pipeline;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Something broke before the acceptance test could start
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = passed (possibly with warnings)
//   Ok(1) = failed with errors
//   Err   = could not set up the run
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logger();

    let config = Config::from_env();
    let pipeline = Pipeline::new(config).context("failed to create the HTTP client")?;

    report::print_banner(&cli.gitrepo);

    let mut ctx = RunContext::new();
    let state = pipeline.run(&cli.gitrepo, &mut ctx).await;
    debug!("Pipeline finished in state {:?}", state);

    report::print_summary(&ctx);

    if ctx.is_success() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Logs go to stderr and stay quiet unless RUST_LOG asks for more,
// e.g. RUST_LOG=debug door43-acceptance -r <url>
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

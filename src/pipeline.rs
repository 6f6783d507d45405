// src/pipeline.rs
// =============================================================================
// Runs the acceptance test stages in order:
//
//   Start -> Located -> CommitResolved -> ArtifactFound -> Validated -> Done
//
// Any stage can jump to Failed instead. When that happens its error text is
// appended to the RunContext and no further stage runs. Warnings are
// collected along the way but never stop the pipeline.
//
// Stages run strictly one after another: each one needs the previous
// one's result (owner/repo -> commit -> published URL -> validation).
//
// Rust concepts:
// - async/await: Each stage awaits its network request before moving on
// - &mut borrowing: The pipeline borrows the caller's RunContext to append
// - Enums with data: Failed(Stage) records where the run stopped
// =============================================================================

use crate::commits::resolve_latest_commit;
use crate::config::Config;
use crate::context::RunContext;
use crate::error::StageError;
use crate::fetch::Fetcher;
use crate::markup::validate;
use crate::publish::check_published;
use crate::repo::locate;
use crate::report;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Locate,
    ResolveCommit,
    CheckPublished,
    ValidateMarkup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Locate => "locate repository",
            Stage::ResolveCommit => "resolve latest commit",
            Stage::CheckPublished => "check published output",
            Stage::ValidateMarkup => "validate markup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    Located,
    CommitResolved,
    ArtifactFound,
    Validated,
    Done,
    Failed(Stage),
}

// Owns the configuration and the HTTP client for one acceptance test
pub struct Pipeline {
    config: Config,
    fetcher: Fetcher,
}

impl Pipeline {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    // Runs every stage against repo_url
    //
    // Parameters:
    //   repo_url: repository URL from the command line
    //   ctx: collects errors and warnings; only ever appended to
    //
    // Returns: Done or Failed(stage). Success of the whole run is
    // ctx.is_success(), which matches Done.
    pub async fn run(&self, repo_url: &str, ctx: &mut RunContext) -> PipelineState {
        let mut state = PipelineState::Start;

        report::step("Checking the repository URL");
        let repo = match locate(repo_url, &self.config) {
            Ok(repo) => repo,
            Err(e) => return fail(ctx, Stage::Locate, &e),
        };
        report::finish();
        advance(&mut state, PipelineState::Located);

        report::step("Getting the most recent commit");
        let commit = match resolve_latest_commit(&self.fetcher, &self.config, &repo).await {
            Ok(commit) => commit,
            Err(e) => return fail(ctx, Stage::ResolveCommit, &e),
        };
        report::finish();
        advance(&mut state, PipelineState::CommitResolved);

        report::step("Verifying that the output file exists");
        let published_url = match check_published(&self.fetcher, &self.config, &repo, &commit).await {
            Ok(url) => url,
            Err(e) => return fail(ctx, Stage::CheckPublished, &e),
        };
        report::finish();
        advance(&mut state, PipelineState::ArtifactFound);

        report::step("Validating the generated HTML");
        let validation = match validate(&self.fetcher, &self.config, &published_url).await {
            Ok(findings) => findings,
            Err(e) => return fail(ctx, Stage::ValidateMarkup, &e),
        };
        if !validation.record(ctx) {
            report::abort();
            debug!("Pipeline failed at stage: {}", Stage::ValidateMarkup);
            return PipelineState::Failed(Stage::ValidateMarkup);
        }
        report::finish();
        advance(&mut state, PipelineState::Validated);

        advance(&mut state, PipelineState::Done);
        state
    }
}

fn advance(state: &mut PipelineState, next: PipelineState) {
    debug!("Pipeline {:?} -> {:?}", state, next);
    *state = next;
}

fn fail(ctx: &mut RunContext, stage: Stage, err: &StageError) -> PipelineState {
    report::abort();
    debug!("Pipeline failed at stage: {} ({:?})", stage, err);
    ctx.record(err);
    PipelineState::Failed(stage)
}

// src/report.rs
// =============================================================================
// Everything the acceptance test prints to the terminal.
//
// Output looks like:
//
//   🔍 STARTING: Acceptance test for https://git.door43.org/owner/repo
//
//   * Checking the repository URL... finished.
//   * Getting the most recent commit... finished.
//   * Verifying that the output file exists...
//
//   Acceptance test generated errors:
//     Not able to open https://live.door43.org/u/owner/repo/abc, ...
//   ❌ Acceptance test failed with errors.
//
// The summary is built as a Vec<String> first so tests can check it
// without capturing stdout.
// =============================================================================

use crate::context::RunContext;
use std::io::{self, Write};

pub fn print_banner(repo_url: &str) {
    println!("🔍 STARTING: Acceptance test for {}\n", repo_url);
}

// Prints "* <label>... " and leaves the line open for finish() or abort()
pub fn step(label: &str) {
    print!("* {}... ", label);
    // The line is completed later; flush so it shows while we wait on the network.
    // A failed flush only delays the progress text, so the result is dropped.
    io::stdout().flush().ok();
}

pub fn finish() {
    println!("finished.");
}

pub fn abort() {
    println!();
}

// Builds the closing report: errors, then warnings, then one verdict line
pub fn summary_lines(ctx: &RunContext) -> Vec<String> {
    let mut lines = Vec::new();

    if !ctx.errors().is_empty() {
        lines.push("Acceptance test generated errors:".to_string());
        lines.extend(ctx.errors().iter().map(|e| format!("  {}", e)));
    }

    if !ctx.warnings().is_empty() {
        lines.push("Acceptance test generated warnings:".to_string());
        lines.extend(ctx.warnings().iter().map(|w| format!("  {}", w)));
    }

    let verdict = if !ctx.errors().is_empty() {
        "❌ Acceptance test failed with errors."
    } else if !ctx.warnings().is_empty() {
        "⚠️  Acceptance test passed with warnings."
    } else {
        "✅ PASSED: no errors or warnings were generated."
    };
    lines.push(verdict.to_string());

    lines
}

pub fn print_summary(ctx: &RunContext) {
    println!();
    for line in summary_lines(ctx) {
        println!("{}", line);
    }
}

// src/context.rs
// =============================================================================
// The diagnostics collected while the acceptance test runs.
//
// RunContext is created once in main(), lent to the pipeline as &mut, and
// read by the report afterwards. Stages only ever push to the two lists;
// nothing is removed or reordered, so the report shows messages in the
// order they happened.
// =============================================================================

use crate::error::StageError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunContext {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Records a stage failure using its user-facing message.
    pub fn record(&mut self, err: &StageError) {
        self.error(err.to_string());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The run passed if nothing was added to the error list.
    /// Warnings never change the outcome.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

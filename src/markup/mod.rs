// src/markup/mod.rs
// =============================================================================
// This module runs the published page through an external HTML validator.
//
// Submodules:
// - message: The JSON shape of the validator response
// - validate: Builds the request and sorts messages into warnings/errors
// =============================================================================

mod message;
mod validate;

pub use validate::validate;

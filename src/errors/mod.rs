//! Fatal error types for the analyzer.
//!
//! This module defines the errors that stop the pipeline outright, as
//! opposed to the diagnostics the verifier collects. It includes:
//!
//! - Error structures with source position information
//! - Variants for lexical failures and unverifiable input
//! - Names and tips used when rendering reports

pub mod errors;

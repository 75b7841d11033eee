//! Token-stream verification module.
//!
//! This module walks the flat token stream produced by the lexer and applies
//! local, adjacency-based well-formedness rules. It never builds a tree and
//! never stops at the first problem; every violation becomes a diagnostic:
//!
//! - Program boundaries (`Begin` ... `End`)
//! - Reserved-word arguments and function shape
//! - Declared-before-used identifiers
//! - Operator operands and assignment values
//! - Delimiter nesting, using a stack of open delimiters

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod verifier;

//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (tokenizer) that converts toy-language
//! source into a stream of tokens for verification. It handles:
//!
//! - The ordered, first-match-wins lexical rule table
//! - Recognition of reserved words, literals, operators and delimiters
//! - Token offsets for diagnostics
//! - Comments (kept as tokens) and whitespace (discarded)

pub mod lexer;
pub mod rules;
pub mod tokens;

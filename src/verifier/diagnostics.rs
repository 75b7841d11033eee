use std::fmt::Display;

use thiserror::Error;

use crate::{errors::errors::ErrorTip, Position};

/// A collected rule violation. Unlike [`Error`](crate::errors::errors::Error)
/// it never stops verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Diagnostic { kind, position }
    }

    pub fn offset(&self) -> usize {
        self.position.0
    }

    pub fn get_tip(&self) -> ErrorTip {
        ErrorTip::Suggestion(self.kind.to_string())
    }

    pub fn get_name(&self) -> &'static str {
        match &self.kind {
            DiagnosticKind::MissingProgramStart { .. } => "MissingProgramStart",
            DiagnosticKind::MissingProgramEnd { .. } => "MissingProgramEnd",
            DiagnosticKind::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            DiagnosticKind::ExpectedDelimiter { .. } => "ExpectedDelimiter",
            DiagnosticKind::ExpectedReturnValue => "ExpectedReturnValue",
            DiagnosticKind::MissingInitializer { .. } => "MissingInitializer",
            DiagnosticKind::UndefinedIdentifier { .. } => "UndefinedIdentifier",
            DiagnosticKind::MissingRightOperand { .. } => "MissingRightOperand",
            DiagnosticKind::MissingLeftOperand { .. } => "MissingLeftOperand",
            DiagnosticKind::UnmatchedClosingDelimiter { .. } => "UnmatchedClosingDelimiter",
            DiagnosticKind::MismatchedDelimiter { .. } => "MismatchedDelimiter",
            DiagnosticKind::UnclosedDelimiters { .. } => "UnclosedDelimiters",
            DiagnosticKind::InvalidAssignment { .. } => "InvalidAssignment",
            DiagnosticKind::MalformedFunction => "MalformedFunction",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error at position {}: {}", self.position.0, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("the program must begin with '{expected}'")]
    MissingProgramStart { expected: String },
    #[error("the program must end with '{expected}'")]
    MissingProgramEnd { expected: String },
    #[error("expected an identifier after '{keyword}'")]
    ExpectedIdentifier { keyword: String },
    #[error("expected an opening delimiter after '{keyword}'")]
    ExpectedDelimiter { keyword: String },
    #[error("expected an identifier or number after 'return'")]
    ExpectedReturnValue,
    #[error("declaration of '{name}' must be followed by '='")]
    MissingInitializer { name: String },
    #[error("'{name}' is undefined")]
    UndefinedIdentifier { name: String },
    #[error("expected an identifier, number, string or opening delimiter after operator '{operator}'")]
    MissingRightOperand { operator: String },
    #[error("expected an identifier or number before comparison operator '{operator}'")]
    MissingLeftOperand { operator: String },
    #[error("closing delimiter '{delimiter}' without matching opening")]
    UnmatchedClosingDelimiter { delimiter: String },
    #[error("mismatched delimiter: expected '{expected}', found '{found}'")]
    MismatchedDelimiter { expected: String, found: String },
    #[error("unclosed delimiters: {count} left open")]
    UnclosedDelimiters { count: usize },
    #[error("invalid assignment to '{name}'")]
    InvalidAssignment { name: String },
    #[error("malformed function structure, expected 'fun <name> {{'")]
    MalformedFunction,
}

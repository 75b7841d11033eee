//! Utility macros for the analyzer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TOKEN_HANDLER!` - Creates a lexer handler emitting one kind of token
//!
//! These macros keep the lexical rule table down to one line per rule.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler that emits the matched lexeme as a token of the
/// given kind.
///
/// The generated closure captures nothing, so it coerces to a
/// [`RegexHandler`](crate::lexer::lexer::RegexHandler) function pointer.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("delimiter", r"[(){}]", MK_TOKEN_HANDLER!(TokenKind::Delimiter))
/// ```
#[macro_export]
macro_rules! MK_TOKEN_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str, span: Span| {
            lexer.push(MK_TOKEN!($kind, String::from(matched), span));
        }
    };
}

//! The ordered lexical rule table.
//!
//! Rules are tried top to bottom at the cursor and the first one matching a
//! non-empty prefix wins, so order encodes precedence: reserved words before
//! identifiers, float literals before integer literals.

use lazy_static::lazy_static;
use regex::{Match, Regex};

use crate::{Span, MK_TOKEN, MK_TOKEN_HANDLER};

use super::{
    lexer::{Lexer, RegexHandler},
    tokens::{Token, TokenKind, RESERVED_WORDS},
};

lazy_static! {
    pub static ref STANDARD_RULES: LexicalRules =
        LexicalRules::standard().expect("built-in lexical rules must compile");
}

#[derive(Clone)]
pub struct RegexPattern {
    name: &'static str,
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// Compiles `pattern` anchored at the start of the remaining input.
    pub fn new(name: &'static str, pattern: &str, handler: RegexHandler) -> Result<Self, regex::Error> {
        Ok(RegexPattern {
            name,
            regex: Regex::new(&format!("^(?:{})", pattern))?,
            handler,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handler(&self) -> RegexHandler {
        self.handler
    }
}

#[derive(Clone)]
pub struct LexicalRules {
    patterns: Vec<RegexPattern>,
}

impl LexicalRules {
    pub fn new(patterns: Vec<RegexPattern>) -> Self {
        LexicalRules { patterns }
    }

    pub fn standard() -> Result<Self, regex::Error> {
        let reserved = format!(r"\b(?:{})\b", RESERVED_WORDS.join("|"));

        Ok(LexicalRules::new(vec![
            RegexPattern::new("reserved word", &reserved, MK_TOKEN_HANDLER!(TokenKind::ReservedWord))?,
            RegexPattern::new("float literal", r"\b[0-9]+\.[0-9]+\b", MK_TOKEN_HANDLER!(TokenKind::FloatLiteral))?,
            RegexPattern::new("integer literal", r"\b[0-9]+\b", MK_TOKEN_HANDLER!(TokenKind::IntLiteral))?,
            RegexPattern::new("comparison operator", r"==|!=|<|>", MK_TOKEN_HANDLER!(TokenKind::ComparisonOperator))?,
            RegexPattern::new("arithmetic operator", r"[+\-*/=]", MK_TOKEN_HANDLER!(TokenKind::ArithmeticOperator))?,
            RegexPattern::new("delimiter", r"[(){}]", MK_TOKEN_HANDLER!(TokenKind::Delimiter))?,
            RegexPattern::new("string literal", r#"".*?""#, MK_TOKEN_HANDLER!(TokenKind::StringLiteral))?,
            RegexPattern::new("comment", r"#.*", MK_TOKEN_HANDLER!(TokenKind::Comment))?,
            RegexPattern::new("identifier", r"[a-zA-Z_][a-zA-Z0-9_]*", MK_TOKEN_HANDLER!(TokenKind::Identifier))?,
            RegexPattern::new("whitespace", r"[ \t\r\n]+", skip_handler)?,
        ]))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(RegexPattern::name).collect()
    }

    /// Returns the first rule matching a non-empty prefix of `remainder`.
    pub fn match_at<'r, 's>(&'r self, remainder: &'s str) -> Option<(&'r RegexPattern, Match<'s>)> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .filter(|found| !found.is_empty())
                .map(|found| (pattern, found))
        })
    }
}

fn skip_handler(_lexer: &mut Lexer, _matched: &str, _span: Span) {}

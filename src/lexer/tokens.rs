use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Reserved words in rule-table order.
pub const RESERVED_WORDS: [&str; 13] = [
    "fun", "Begin", "End", "float", "int", "number", "in", "out", "if", "else", "return", "var",
    "call",
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("fun", Keyword::Fun);
        map.insert("Begin", Keyword::Begin);
        map.insert("End", Keyword::End);
        map.insert("float", Keyword::Float);
        map.insert("int", Keyword::Int);
        map.insert("number", Keyword::Number);
        map.insert("in", Keyword::In);
        map.insert("out", Keyword::Out);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("return", Keyword::Return);
        map.insert("var", Keyword::Var);
        map.insert("call", Keyword::Call);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ReservedWord,
    FloatLiteral,
    IntLiteral,
    ComparisonOperator, // == != < >
    ArithmeticOperator, // + - * / =
    Delimiter,          // ( ) { }
    StringLiteral,
    Comment,
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Fun,
    Begin,
    End,
    Float,
    Int,
    Number,
    In,
    Out,
    If,
    Else,
    Return,
    Var,
    Call,
}

/// What a reserved word demands of the token after it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeywordRole {
    /// `Begin` / `End`, only checked at the stream boundaries.
    ProgramMarker,
    /// Introduces a name: `var`, `fun` and the typed declarations.
    Declaration,
    /// `if`, `else`, `in`, `out`: followed by an opening delimiter.
    Block,
    Call,
    Return,
}

impl Keyword {
    pub fn from_lexeme(lexeme: &str) -> Option<Keyword> {
        RESERVED_LOOKUP.get(lexeme).copied()
    }

    pub fn role(&self) -> KeywordRole {
        match self {
            Keyword::Begin | Keyword::End => KeywordRole::ProgramMarker,
            Keyword::Var | Keyword::Fun | Keyword::Float | Keyword::Int | Keyword::Number => {
                KeywordRole::Declaration
            }
            Keyword::If | Keyword::Else | Keyword::In | Keyword::Out => KeywordRole::Block,
            Keyword::Call => KeywordRole::Call,
            Keyword::Return => KeywordRole::Return,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:?}, {})", self.kind, self.value, self.offset())
    }
}

impl Token {
    pub fn offset(&self) -> usize {
        self.span.start.0
    }

    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::ReservedWord {
            Keyword::from_lexeme(&self.value)
        } else {
            None
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_opening_delimiter(&self) -> bool {
        self.kind == TokenKind::Delimiter && (self.value == "(" || self.value == "{")
    }

    pub fn is_closing_delimiter(&self) -> bool {
        self.kind == TokenKind::Delimiter && (self.value == ")" || self.value == "}")
    }

    pub fn is_assignment(&self) -> bool {
        self.kind == TokenKind::ArithmeticOperator && self.value == "="
    }

    pub fn is_numeric_literal(&self) -> bool {
        self.is_one_of_many(&[TokenKind::IntLiteral, TokenKind::FloatLiteral])
    }
}

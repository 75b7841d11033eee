use std::rc::Rc;

use crate::{debug_log, errors::errors::{Error, ErrorImpl}, Position, Span};

use super::{rules::{LexicalRules, STANDARD_RULES}, tokens::Token};

/// Decides what, if anything, to emit for a match. The cursor has already
/// moved past `span` when a handler runs.
pub type RegexHandler = fn(&mut Lexer, &str, Span);

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Tokenizes `source` with the built-in rule table.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source, file, &STANDARD_RULES)
}

/// Tokenizes `source`, trying `rules` in order at every position.
///
/// Every non-empty match moves the cursor to its end, whatever the rule's
/// handler emits. The first position where no rule matches aborts the whole
/// run with `UnrecognisedCharacter`.
pub fn tokenize_with(source: String, file: Option<String>, rules: &LexicalRules) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    debug_log!("lexer: rules {}", rules.names().join(" > "));

    while !lex.at_eof() {
        let Some((pattern, found)) = rules.match_at(lex.remainder()) else {
            let character = lex.at().unwrap_or('\0');
            return Err(Error::new(ErrorImpl::UnrecognisedCharacter { character }, lex.position()));
        };

        let matched = found.as_str().to_string();
        let start = lex.position();
        lex.advance_n(matched.len());
        let span = Span { start, end: lex.position() };

        (pattern.handler())(&mut lex, &matched, span);
    }

    debug_log!("lexer: {} tokens from {}", lex.tokens.len(), lex.file);
    Ok(lex.tokens)
}

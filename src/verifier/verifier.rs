use std::collections::HashSet;

use crate::{
    debug_log,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, KeywordRole, Token, TokenKind},
    Position,
};

use super::{
    config::{DeclarationPolicy, VerifierConfig},
    context::PrecedingContext,
    diagnostics::{Diagnostic, DiagnosticKind},
};

const OPERAND_KINDS: [TokenKind; 4] = [
    TokenKind::Identifier,
    TokenKind::IntLiteral,
    TokenKind::FloatLiteral,
    TokenKind::StringLiteral,
];

const COMPARISON_LEFT_KINDS: [TokenKind; 3] = [
    TokenKind::Identifier,
    TokenKind::IntLiteral,
    TokenKind::FloatLiteral,
];

const RETURN_VALUE_KINDS: [TokenKind; 3] = COMPARISON_LEFT_KINDS;

/// Per-run state. Built fresh by [`verify`] and dropped with it.
struct Verifier<'a> {
    tokens: Vec<&'a Token>,
    config: &'a VerifierConfig,
    diagnostics: Vec<Diagnostic>,
    delimiters: Vec<&'a Token>,
    declared: HashSet<&'a str>,
}

impl<'a> Verifier<'a> {
    fn new(tokens: Vec<&'a Token>, config: &'a VerifierConfig) -> Self {
        Verifier {
            tokens,
            config,
            diagnostics: vec![],
            delimiters: vec![],
            declared: HashSet::new(),
        }
    }

    fn at(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index).copied()
    }

    fn report(&mut self, kind: DiagnosticKind, token: &Token) {
        self.diagnostics.push(Diagnostic::new(kind, token.span.start.clone()));
    }

    fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    fn check_boundaries(&mut self) {
        let (Some(first), Some(last)) = (self.tokens.first().copied(), self.tokens.last().copied()) else {
            return;
        };

        if first.value != self.config.start_keyword {
            let expected = self.config.start_keyword.clone();
            self.report(DiagnosticKind::MissingProgramStart { expected }, first);
        }
        if last.value != self.config.end_keyword {
            let expected = self.config.end_keyword.clone();
            self.report(DiagnosticKind::MissingProgramEnd { expected }, last);
        }
    }

    fn scan(&mut self) {
        for index in 0..self.tokens.len() {
            let token = self.tokens[index];

            match token.kind {
                TokenKind::ReservedWord => self.check_keyword(index, token),
                TokenKind::Identifier => self.check_identifier(index, token),
                TokenKind::ArithmeticOperator | TokenKind::ComparisonOperator => {
                    self.check_operator(index, token)
                }
                TokenKind::Delimiter => self.check_delimiter(token),
                _ => {}
            }
        }
    }

    fn check_keyword(&mut self, index: usize, token: &'a Token) {
        let Some(keyword) = token.keyword() else {
            return;
        };
        let next = self.at(index + 1);

        match keyword.role() {
            KeywordRole::ProgramMarker => {}
            KeywordRole::Declaration => {
                match next.filter(|next| next.kind == TokenKind::Identifier) {
                    Some(name) => self.bind_declaration(index, keyword, name),
                    None => self.report(
                        DiagnosticKind::ExpectedIdentifier { keyword: token.value.clone() },
                        token,
                    ),
                }

                if keyword == Keyword::Fun {
                    self.check_function_shape(index, token);
                }
            }
            KeywordRole::Block => {
                if !next.is_some_and(Token::is_opening_delimiter) {
                    self.report(DiagnosticKind::ExpectedDelimiter { keyword: token.value.clone() }, token);
                }
            }
            KeywordRole::Call => {
                if !next.is_some_and(|next| next.kind == TokenKind::Identifier) {
                    self.report(DiagnosticKind::ExpectedIdentifier { keyword: token.value.clone() }, token);
                }
            }
            KeywordRole::Return => {
                if !next.is_some_and(|next| next.is_one_of_many(&RETURN_VALUE_KINDS)) {
                    self.report(DiagnosticKind::ExpectedReturnValue, token);
                }
            }
        }
    }

    fn bind_declaration(&mut self, index: usize, keyword: Keyword, name: &'a Token) {
        let binds = match self.config.declaration_policy {
            DeclarationPolicy::BindOnSight => true,
            DeclarationPolicy::RequireInitializer if keyword == Keyword::Fun => true,
            DeclarationPolicy::RequireInitializer => {
                let initialized = self.at(index + 2).is_some_and(Token::is_assignment);
                if !initialized {
                    self.report(DiagnosticKind::MissingInitializer { name: name.value.clone() }, name);
                }
                initialized
            }
        };

        if binds {
            // Redeclaration is allowed; the set only grows.
            self.declared.insert(name.value.as_str());
        }
    }

    fn check_function_shape(&mut self, index: usize, token: &Token) {
        let named = self.at(index + 1).is_some_and(|name| name.kind == TokenKind::Identifier);
        let opens_body = self
            .at(index + 2)
            .is_some_and(|body| body.kind == TokenKind::Delimiter && body.value == "{");

        if !(named && opens_body) {
            self.report(DiagnosticKind::MalformedFunction, token);
        }
    }

    fn check_identifier(&mut self, index: usize, token: &'a Token) {
        let previous = index.checked_sub(1).and_then(|previous| self.at(previous));
        let context = PrecedingContext::classify(previous);

        if context.requires_declaration() && !self.is_declared(&token.value) {
            self.report(DiagnosticKind::UndefinedIdentifier { name: token.value.clone() }, token);
        }

        if self.at(index + 1).is_some_and(Token::is_assignment)
            && !self.at(index + 2).is_some_and(|value| value.is_one_of_many(&OPERAND_KINDS))
        {
            self.report(DiagnosticKind::InvalidAssignment { name: token.value.clone() }, token);
        }
    }

    fn check_operator(&mut self, index: usize, token: &Token) {
        let right = self.at(index + 1);
        if !right.is_some_and(|right| right.is_one_of_many(&OPERAND_KINDS) || right.is_opening_delimiter()) {
            self.report(DiagnosticKind::MissingRightOperand { operator: token.value.clone() }, token);
        }

        if token.kind == TokenKind::ComparisonOperator {
            let left = index.checked_sub(1).and_then(|previous| self.at(previous));
            if !left.is_some_and(|left| left.is_one_of_many(&COMPARISON_LEFT_KINDS)) {
                self.report(DiagnosticKind::MissingLeftOperand { operator: token.value.clone() }, token);
            }
        }
    }

    fn check_delimiter(&mut self, token: &'a Token) {
        if token.is_opening_delimiter() {
            self.delimiters.push(token);
            return;
        }

        let Some(top) = self.delimiters.last().copied() else {
            self.report(DiagnosticKind::UnmatchedClosingDelimiter { delimiter: token.value.clone() }, token);
            return;
        };

        let expected = closer_for(&top.value);
        if expected == token.value {
            self.delimiters.pop();
            return;
        }

        self.report(
            DiagnosticKind::MismatchedDelimiter {
                expected: expected.to_string(),
                found: token.value.clone(),
            },
            token,
        );

        // A crossed pair like `( { ) }` closes the deeper opener and leaves
        // the top one to its own closer.
        match self.delimiters.iter().rposition(|open| closer_for(&open.value) == token.value) {
            Some(depth) => {
                self.delimiters.remove(depth);
            }
            None => {
                self.delimiters.pop();
            }
        }
    }

    fn check_unclosed(&mut self) {
        if let Some(outermost) = self.delimiters.first().copied() {
            let count = self.delimiters.len();
            self.report(DiagnosticKind::UnclosedDelimiters { count }, outermost);
        }
    }
}

fn closer_for(opening: &str) -> &'static str {
    match opening {
        "(" => ")",
        _ => "}",
    }
}

/// Runs every well-formedness rule over `tokens` and collects the
/// violations in the order they are found.
///
/// Comment tokens are dropped first, so they never sit between a keyword and
/// its argument. Fails only when no other token is left.
pub fn verify(tokens: &[Token], config: &VerifierConfig) -> Result<Vec<Diagnostic>, Error> {
    let significant: Vec<&Token> = tokens.iter().filter(|token| token.kind != TokenKind::Comment).collect();

    if significant.is_empty() {
        let position = tokens.last().map(|token| token.span.end.clone()).unwrap_or_else(Position::null);
        return Err(Error::new(ErrorImpl::EmptyTokenStream, position));
    }

    let mut verifier = Verifier::new(significant, config);
    verifier.check_boundaries();
    verifier.scan();
    verifier.check_unclosed();

    debug_log!(
        "verifier: {} diagnostics over {} tokens, {} identifiers declared",
        verifier.diagnostics.len(),
        verifier.tokens.len(),
        verifier.declared.len()
    );
    Ok(verifier.diagnostics)
}

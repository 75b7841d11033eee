use crate::lexer::tokens::{KeywordRole, Token};

/// Where an identifier sits, judged from the token right before it.
///
/// This is the whole of the declared-before-used policy's lookback: only
/// `Usage` identifiers are checked against the declared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecedingContext {
    /// After `var`, `fun`, `float`, `int` or `number`: the name is being introduced.
    Declaration,
    /// After `call`: function targets are never reported as undefined.
    CallTarget,
    Usage,
}

impl PrecedingContext {
    pub fn classify(previous: Option<&Token>) -> PrecedingContext {
        match previous.and_then(Token::keyword).map(|keyword| keyword.role()) {
            Some(KeywordRole::Declaration) => PrecedingContext::Declaration,
            Some(KeywordRole::Call) => PrecedingContext::CallTarget,
            _ => PrecedingContext::Usage,
        }
    }

    pub fn requires_declaration(&self) -> bool {
        *self == PrecedingContext::Usage
    }
}

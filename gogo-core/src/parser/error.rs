use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

use crate::lexer::{Token, TokenKind};

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("expected {expected}, got EOF")]
    PrematureEndOfInput { expected: Expected },
    #[error("expected {expected}, got {got}")]
    UnexpectedToken { expected: Expected, got: Token },
    #[error("no prefix parse rule for token kind {0}")]
    NoPrefixParseRule(Token),
    /// Input ran out where an expression should start.
    #[error("no prefix parse rule for token kind EOF")]
    NoPrefixParseRuleAtEof,
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(Rc<str>),
}

#[derive(Debug, PartialEq)]
pub enum Expected {
    Token(TokenKind),
    Identifier,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "token {}", kind),
            Expected::Identifier => write!(f, "token IDENT"),
        }
    }
}

impl ParseError {
    pub fn unexpected_token(expected: TokenKind, got: Option<Token>) -> ParseError {
        Self::unexpected_other(Expected::Token(expected), got)
    }

    pub fn unexpected_other(expected: Expected, got: Option<Token>) -> ParseError {
        match got {
            Some(got) => ParseError::UnexpectedToken { expected, got },
            None => ParseError::PrematureEndOfInput { expected },
        }
    }

    /// The token that was consumed when the error was raised, if any.
    pub fn offending_token(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { got, .. } => Some(got),
            ParseError::NoPrefixParseRule(token) => Some(token),
            ParseError::PrematureEndOfInput { .. }
            | ParseError::NoPrefixParseRuleAtEof
            | ParseError::InvalidInteger(_) => None,
        }
    }
}

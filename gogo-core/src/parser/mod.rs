pub mod error;
pub mod expressions;
pub mod statements;

use tracing::debug;

use crate::lexer::{Token, TokenKind};
pub use error::ParseError;
use statements::{parse_statement, synchronize};

pub struct Parser<'a> {
    pub iter: std::iter::Peekable<crate::lexer::Tokenizer<'a>>,
    // errors recovered from inside blocks, in the order they were found
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokenizer: crate::lexer::Tokenizer<'a>) -> Self {
        let iter = tokenizer.peekable();
        Self {
            iter,
            errors: Vec::new(),
        }
    }

    pub(crate) fn parse_ident(&mut self) -> Result<std::rc::Rc<str>, ParseError> {
        let token = self.iter.next();
        match token {
            Some(Token {
                kind: TokenKind::Ident(name),
                ..
            }) => Ok(name),
            _ => Err(ParseError::unexpected_other(
                error::Expected::Identifier,
                token,
            )),
        }
    }

    pub(crate) fn expect_token(&mut self, token_kind: TokenKind) -> Result<(), ParseError> {
        let token = self.iter.next();
        match token {
            Some(Token { kind, .. }) if kind == token_kind => Ok(()),
            _ => Err(ParseError::unexpected_token(token_kind, token)),
        }
    }

    pub(crate) fn record_error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    pub(crate) fn skip_semicolon(&mut self) {
        self.iter
            .next_if(|token| token.kind == TokenKind::SemiColon);
    }

    /// Parses the whole input. Syntax errors do not stop parsing: the
    /// failed statement is dropped, the parser resynchronizes at the next
    /// statement boundary and carries on.
    pub fn parse(&mut self) -> (crate::ast::Program, Vec<ParseError>) {
        let mut statements = Vec::new();

        while self.iter.peek().is_some() {
            match parse_statement(self) {
                Ok(statement) => {
                    statements.push(statement);
                    self.skip_semicolon();
                }
                Err(err) => {
                    synchronize(self, &err);
                    self.record_error(err);
                }
            }
        }

        let errors = std::mem::take(&mut self.errors);
        debug!(
            statements = statements.len(),
            errors = errors.len(),
            "parsed program"
        );
        (crate::ast::Program { statements }, errors)
    }

    pub fn parse_program(&mut self) -> Result<crate::ast::Program, Vec<ParseError>> {
        let (program, errors) = self.parse();
        if errors.is_empty() {
            Ok(program)
        } else {
            Err(errors)
        }
    }
}

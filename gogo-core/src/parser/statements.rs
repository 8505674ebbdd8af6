use super::expressions::{parse_expression, Precedence};
use super::{ParseError, Parser};
use crate::ast::{Identifier, LetStatement, ReturnStatement, Statement};
use crate::lexer::TokenKind;

pub fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    match parser.iter.peek().map(|token| &token.kind) {
        Some(TokenKind::Let) => parse_let_statement(parser).map(Statement::Let),
        Some(TokenKind::Return) => parse_return_statement(parser).map(Statement::Return),
        _ => parse_expression(parser, Precedence::Lowest).map(Statement::Expression),
    }
}

// let <identifier> = <expression>
fn parse_let_statement(parser: &mut Parser) -> Result<LetStatement, ParseError> {
    parser.expect_token(TokenKind::Let)?;
    let identifier = Identifier {
        name: parser.parse_ident()?,
    };
    parser.expect_token(TokenKind::Assign)?;

    Ok(LetStatement {
        identifier,
        value: parse_expression(parser, Precedence::Lowest)?,
    })
}

fn parse_return_statement(parser: &mut Parser) -> Result<ReturnStatement, ParseError> {
    parser.expect_token(TokenKind::Return)?;

    Ok(ReturnStatement {
        value: parse_expression(parser, Precedence::Lowest)?,
    })
}

/// Skips what is left of a statement that failed with `error`.
///
/// Skipping stops after a `;`, or before a `let`, `return` or unmatched `}`,
/// whichever comes first. Braces opened on the way (including one consumed
/// by the failing rule) are skipped as a unit, so a broken block does not
/// leak its statements into the enclosing one.
pub fn synchronize(parser: &mut Parser, error: &ParseError) {
    let mut depth = 0usize;
    match error.offending_token().map(|token| &token.kind) {
        Some(TokenKind::SemiColon) => return,
        Some(TokenKind::LBrace) => depth = 1,
        _ => {}
    }

    while let Some(token) = parser.iter.peek() {
        match token.kind {
            TokenKind::Let | TokenKind::Return | TokenKind::RBrace if depth == 0 => return,
            TokenKind::SemiColon if depth == 0 => {
                parser.iter.next();
                return;
            }
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        parser.iter.next();
    }
}

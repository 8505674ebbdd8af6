pub use crate::token::{Token, TokenKind};

use crate::token::lookup_keyword;

#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self { input, iter }
    }

    fn is_letter(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_whitespace(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\r')
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// an `Eof` token positioned at the end of the input.
    pub fn next_token(&mut self) -> Token {
        while self.iter.next_if(|(_, ch)| Self::is_whitespace(*ch)).is_some() {}

        let Some((start, ch)) = self.iter.next() else {
            return Token {
                kind: TokenKind::Eof,
                start: self.input.len(),
                end: self.input.len(),
            };
        };

        let kind = match ch {
            '=' => self.either('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.either('=', TokenKind::NotEqual, TokenKind::Bang),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            ',' => TokenKind::Comma,
            ';' => TokenKind::SemiColon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '"' => return self.read_string(start),
            c if Self::is_letter(c) => return self.read_identifier(start),
            c if c.is_ascii_digit() => return self.read_number(start),
            _ => TokenKind::Illegal(ch.to_string().into()),
        };

        Token {
            kind,
            start,
            end: self.next_idx(),
        }
    }

    fn either(&mut self, lookahead: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.iter.next_if(|(_, ch)| *ch == lookahead).is_some() {
            matched
        } else {
            single
        }
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| Self::is_letter(*ch)).is_some() {}

        let end = self.next_idx();
        let ident = &self.input[start..end];
        Token {
            kind: lookup_keyword(ident).unwrap_or_else(|| TokenKind::Ident(ident.into())),
            start,
            end,
        }
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}

        let end = self.next_idx();
        Token {
            kind: TokenKind::Int(self.input[start..end].into()),
            start,
            end,
        }
    }

    // No escape sequences. A missing closing quote takes the rest of the
    // input as the string contents.
    fn read_string(&mut self, start: usize) -> Token {
        let content_start = start + 1;
        let mut content_end = self.input.len();
        for (idx, ch) in self.iter.by_ref() {
            if ch == '"' {
                content_end = idx;
                break;
            }
        }

        Token {
            kind: TokenKind::String(self.input[content_start..content_end].into()),
            start,
            end: self.next_idx(),
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Eof => None,
            _ => Some(token),
        }
    }
}

impl<'a> std::iter::FusedIterator for Tokenizer<'a> {}

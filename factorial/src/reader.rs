use crate::coerce::is_c_space;
use std::io::{self, BufRead};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    /// First character is `q` or `Q`.
    Quit,
    Number,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "'{}' at {}", self.lexeme, self.position)
    }
}

#[derive(Default, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    pub line_number: usize,
    pub column_number: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "line {}, column {}",
            self.line_number, self.column_number
        )
    }
}

impl Token {
    pub fn new(lexeme: String, position: Position) -> Self {
        let kind = match lexeme.chars().next() {
            Some('q' | 'Q') => TokenKind::Quit,
            _ => TokenKind::Number,
        };
        Self {
            kind,
            lexeme,
            position,
        }
    }

    pub const fn is_quit(&self) -> bool {
        matches!(self.kind, TokenKind::Quit)
    }
}

/// Hands out whitespace-delimited tokens one at a time, straight from
/// the reader's buffer. At most `max_token_len` bytes of a token are kept;
/// the rest is skipped without being stored.
pub struct TokenReader<R> {
    input: R,
    line: usize,
    column: usize,
    max_token_len: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R, max_token_len: usize) -> Self {
        Self {
            input,
            line: 1,
            column: 0,
            max_token_len,
        }
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.input.fill_buf() {
                Ok(buffer) => return Ok(buffer.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn advance(&mut self, byte: u8) {
        self.input.consume(1);
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<Token>> {
        loop {
            match self.peek()? {
                None => return Ok(None),
                Some(byte) if is_c_space(byte as char) => self.advance(byte),
                Some(_) => break,
            }
        }

        let position = Position {
            line_number: self.line,
            column_number: self.column,
        };
        let mut lexeme = Vec::new();
        let mut dropped = 0usize;
        while let Some(byte) = self.peek()? {
            if is_c_space(byte as char) {
                break;
            }
            self.advance(byte);
            if lexeme.len() < self.max_token_len {
                lexeme.push(byte);
            } else {
                dropped += 1;
            }
        }

        let lexeme = String::from_utf8_lossy(&lexeme).into_owned();
        if dropped > 0 {
            log::debug!(
                "Truncated token at {position} to '{lexeme}', dropped {dropped} bytes"
            );
        }
        Ok(Some(Token::new(lexeme, position)))
    }
}

use std::{iter::Peekable, str::CharIndices};

use super::token::{Operator, Token, TokenKind};

/// Splits an expression into tokens. Operators and parentheses are tokens on
/// their own; every run of characters between them becomes a single number
/// or identifier token. Nothing is skipped, so concatenating the token texts
/// gives back the input.
pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

pub fn tokenize(src: &str) -> Lexer<'_> {
    Lexer::new(src)
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let &(off, c) = self.chars.peek()?;

        let kind = match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            c => Operator::from_char(c).map(TokenKind::Op),
        };

        match kind {
            Some(kind) => {
                self.bump();
                Some(Token::new(&self.src[off..off + c.len_utf8()], kind))
            }
            None => {
                let text = self.slice_until(off, Self::is_delimiter);
                Some(Token::operand(text))
            }
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn is_delimiter(c: char) -> bool {
        c == '(' || c == ')' || Operator::from_char(c).is_some()
    }
}

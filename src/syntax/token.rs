use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

pub type Precedence = u8;

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div => 1,
        }
    }

    /// `-` and `/` group to the right, so `8-3-2` is `8-(3-2)`.
    pub fn assoc(self) -> Assoc {
        match self {
            Self::Add | Self::Mul => Assoc::Left,
            Self::Sub | Self::Div => Assoc::Right,
        }
    }

    pub fn get(self) -> (Precedence, Assoc) {
        (self.precedence(), self.assoc())
    }

    /// Number of operands popped when building the tree.
    pub fn arity(self) -> usize {
        2
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Op(Operator),
    Id,

    LParen,
    RParen,
}

/// A slice of the source together with what it was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub kind: TokenKind,
}

impl<'src> Token<'src> {
    pub fn new(text: &'src str, kind: TokenKind) -> Self {
        Self { text, kind }
    }

    /// Classifies a run of non-delimiter characters. All digits makes a
    /// number, anything else is an identifier.
    pub fn operand(text: &'src str) -> Self {
        let kind = if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            TokenKind::Number
        } else {
            TokenKind::Id
        };
        Self { text, kind }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

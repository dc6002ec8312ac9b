use crate::syntax::Operator;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ErrorKind {
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("operator `{op}` expects {expected} operands, found {found}")]
    InsufficientOperands {
        op: Operator,
        expected: usize,
        found: usize,
    },

    #[error("malformed expression: {remaining} values left after building the tree, expected 1")]
    MalformedExpression { remaining: usize },

    #[error("unbound identifier `{0}`")]
    UnboundIdentifier(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid number literal `{0}`")]
    InvalidNumberLiteral(String),
}

pub type PResult<T> = Result<T, ErrorKind>;

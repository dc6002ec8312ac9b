mod lexer;
mod postfix;
mod token;
mod tree;

pub use lexer::{tokenize, Lexer};
pub use postfix::{to_postfix, PostfixQueue};
pub use token::{Assoc, Operator, Precedence, Token, TokenKind};
pub use tree::{build_tree, Node, Outline};

use std::{collections::VecDeque, fmt};

use crate::error::{ErrorKind, PResult};

use super::token::{Assoc, Operator, Token, TokenKind};

/// Tokens in postfix order, consumed front to back by the tree builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostfixQueue<'src> {
    tokens: VecDeque<Token<'src>>,
}

impl<'src> PostfixQueue<'src> {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn push(&mut self, token: Token<'src>) {
        log::trace!("emit `{token}`");
        self.tokens.push_back(token);
    }
}

impl<'src> IntoIterator for PostfixQueue<'src> {
    type Item = Token<'src>;
    type IntoIter = std::collections::vec_deque::IntoIter<Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl fmt::Display for PostfixQueue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}

/// Whether `top`, sitting on the operator stack, has to be emitted before
/// `incoming` is pushed.
fn pops_before(top: Operator, incoming: Operator) -> bool {
    let (top_prec, _) = top.get();
    let (prec, assoc) = incoming.get();

    top_prec > prec || (top_prec == prec && assoc == Assoc::Left)
}

/// Reorders infix tokens into postfix order (shunting-yard).
pub fn to_postfix<'src, I>(tokens: I) -> PResult<PostfixQueue<'src>>
where
    I: IntoIterator<Item = Token<'src>>,
{
    let mut output = PostfixQueue::default();
    let mut stack: Vec<Token<'src>> = Vec::new();
    let mut read = 0usize;

    for token in tokens {
        read += 1;
        log::trace!("read `{token}`, stack depth {}", stack.len());

        match token.kind {
            TokenKind::Number | TokenKind::Id => output.push(token),
            TokenKind::Op(op) => {
                // Right parens are never pushed, so only operators can pop here.
                while let Some(top) = stack.last().copied() {
                    match top.kind {
                        TokenKind::Op(top_op) if pops_before(top_op, op) => {
                            stack.pop();
                            output.push(top);
                        }
                        _ => break,
                    }
                }
                stack.push(token);
            }
            TokenKind::LParen => stack.push(token),
            TokenKind::RParen => loop {
                match stack.pop() {
                    None => return Err(ErrorKind::MismatchedParentheses),
                    Some(top) if top.kind == TokenKind::LParen => break,
                    Some(top) => output.push(top),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LParen {
            return Err(ErrorKind::MismatchedParentheses);
        }
        output.push(top);
    }

    log::debug!("{read} tokens read, {} in postfix: {output}", output.len());
    Ok(output)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::to_postfix;
    use crate::{error::ErrorKind, syntax::tokenize};

    fn postfix_str(src: &str) -> String {
        to_postfix(tokenize(src)).unwrap().to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(postfix_str("3+4"), "3 4 +");
        assert_eq!(postfix_str("2*3+4"), "2 3 * 4 +");
        assert_eq!(postfix_str("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix_str("(2+3)*4"), "2 3 + 4 *");
    }

    #[test]
    fn left_assoc_operators_pop_equal_precedence() {
        assert_eq!(postfix_str("2+3+4"), "2 3 + 4 +");
        assert_eq!(postfix_str("8-3+2"), "8 3 - 2 +");
        assert_eq!(postfix_str("8/2*4"), "8 2 / 4 *");
    }

    #[test]
    fn minus_and_div_group_right() {
        assert_eq!(postfix_str("8-3-2"), "8 3 2 - -");
        assert_eq!(postfix_str("8/4/2"), "8 4 2 / /");
        assert_eq!(postfix_str("2*3/4"), "2 3 4 / *");
    }

    #[test]
    fn nested_groups() {
        assert_eq!(
            postfix_str("(((3*2)+(20/4)/5)+(17/2))/12"),
            "3 2 * 20 4 / 5 / + 17 2 / + 12 /"
        );
    }

    #[test]
    fn identifiers_pass_through() {
        assert_eq!(postfix_str("a*(b+1)"), "a b 1 + *");
    }

    #[test]
    fn empty_input() {
        assert!(to_postfix(tokenize("")).unwrap().is_empty());
        assert!(to_postfix(tokenize("()")).unwrap().is_empty());
    }

    #[test]
    fn parentheses_are_dropped() {
        let postfix = to_postfix(tokenize("((1+2))*3")).unwrap();
        assert_eq!(postfix.len(), 5);
    }

    #[test]
    fn unmatched_right_paren() {
        assert_eq!(
            to_postfix(tokenize("1+2)")),
            Err(ErrorKind::MismatchedParentheses)
        );
        assert_eq!(to_postfix(tokenize(")")), Err(ErrorKind::MismatchedParentheses));
    }

    #[test]
    fn unmatched_left_paren() {
        assert_eq!(
            to_postfix(tokenize("(1+2")),
            Err(ErrorKind::MismatchedParentheses)
        );
        assert_eq!(
            to_postfix(tokenize("((1)")),
            Err(ErrorKind::MismatchedParentheses)
        );
    }
}

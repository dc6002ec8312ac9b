use std::fmt;

use crate::error::{ErrorKind, PResult};

use super::token::{Token, TokenKind};

/// A node of the expression tree. Operator nodes own their operands in
/// left-to-right order; number and identifier nodes are leaves.
///
/// A chain like `1-1-...-1` nests as deep as it is long, so nothing here
/// walks the tree by recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'src> {
    token: Token<'src>,
    children: Vec<Node<'src>>,
}

impl<'src> Node<'src> {
    fn leaf(token: Token<'src>) -> Self {
        Self {
            token,
            children: Vec::new(),
        }
    }

    pub fn token(&self) -> &Token<'src> {
        &self.token
    }

    pub fn children(&self) -> &[Node<'src>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// One node per line, children indented below their operator.
    pub fn outline(&self) -> Outline<'_, 'src> {
        Outline(self)
    }
}

impl Drop for Node<'_> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

enum Piece<'a, 'src> {
    Node(&'a Node<'src>),
    Text(&'a str),
}

/// Fully parenthesized infix, e.g. `((2 * 3) + 4)`.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Node(self)];

        while let Some(piece) = stack.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };

            if node.is_leaf() {
                f.write_str(node.token.text)?;
                continue;
            }

            f.write_str("(")?;
            stack.push(Piece::Text(")"));
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push(Piece::Node(child));
                if i > 0 {
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Text(node.token.text));
                    stack.push(Piece::Text(" "));
                }
            }
        }
        Ok(())
    }
}

pub struct Outline<'a, 'src>(&'a Node<'src>);

impl fmt::Display for Outline<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.0, 0)];
        while let Some((node, indent)) = stack.pop() {
            writeln!(f, "{:width$}{}", "", node.token.text, width = indent * 2)?;
            stack.extend(node.children.iter().rev().map(|child| (child, indent + 1)));
        }
        Ok(())
    }
}

/// Builds the expression tree from tokens in postfix order.
pub fn build_tree<'src, I>(postfix: I) -> PResult<Node<'src>>
where
    I: IntoIterator<Item = Token<'src>>,
{
    let mut pending: Vec<Node<'src>> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Number | TokenKind::Id => pending.push(Node::leaf(token)),
            TokenKind::Op(op) => {
                let arity = op.arity();
                if pending.len() < arity {
                    return Err(ErrorKind::InsufficientOperands {
                        op,
                        expected: arity,
                        found: pending.len(),
                    });
                }

                let children = pending.split_off(pending.len() - arity);
                log::trace!("`{token}` takes {arity} operands");
                pending.push(Node { token, children });
            }
            TokenKind::LParen | TokenKind::RParen => {
                return Err(ErrorKind::MismatchedParentheses)
            }
        }
    }

    match pending.len() {
        1 => Ok(pending.remove(0)),
        remaining => Err(ErrorKind::MalformedExpression { remaining }),
    }
}

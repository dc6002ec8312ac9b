use crate::{
    error::{ErrorKind, PResult},
    syntax::{Node, Operator, TokenKind},
};

impl Operator {
    pub fn apply(self, lhs: f64, rhs: f64) -> PResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(ErrorKind::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

/// Evaluates the tree bottom-up, operands left to right. Uses an explicit
/// work stack, so tree depth is bounded by memory rather than the call stack.
pub fn eval_tree(root: &Node) -> PResult<f64> {
    let mut work = vec![(root, false)];
    let mut values: Vec<f64> = Vec::new();

    while let Some((node, expanded)) = work.pop() {
        let token = node.token();

        match token.kind {
            TokenKind::Number => {
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| ErrorKind::InvalidNumberLiteral(token.text.to_string()))?;
                values.push(value as f64);
            }
            TokenKind::Id => return Err(ErrorKind::UnboundIdentifier(token.text.to_string())),
            TokenKind::Op(op) if !expanded => {
                let found = node.children().len();
                if found != op.arity() {
                    return Err(ErrorKind::InsufficientOperands {
                        op,
                        expected: op.arity(),
                        found,
                    });
                }

                work.push((node, true));
                work.extend(node.children().iter().rev().map(|child| (child, false)));
            }
            TokenKind::Op(op) => {
                let rhs = values.pop();
                let lhs = values.pop();
                match (lhs, rhs) {
                    (Some(lhs), Some(rhs)) => values.push(op.apply(lhs, rhs)?),
                    _ => {
                        return Err(ErrorKind::InsufficientOperands {
                            op,
                            expected: op.arity(),
                            found: 0,
                        })
                    }
                }
            }
            TokenKind::LParen | TokenKind::RParen => {
                return Err(ErrorKind::MismatchedParentheses)
            }
        }
    }

    values
        .pop()
        .ok_or(ErrorKind::MalformedExpression { remaining: 0 })
}

#[cfg(test)]
mod test {
    use super::eval_tree;
    use crate::{
        error::{ErrorKind, PResult},
        syntax::{build_tree, to_postfix, tokenize, Operator},
    };

    fn eval_str(src: &str) -> PResult<f64> {
        let tree = build_tree(to_postfix(tokenize(src))?)?;
        eval_tree(&tree)
    }

    #[test]
    fn eval_1() {
        assert_eq!(eval_str("4+10*2").unwrap(), 24.0);
    }

    #[test]
    fn eval_2() {
        assert_eq!(eval_str("(4+10)*2").unwrap(), 28.0);
    }

    #[test]
    fn eval_3() {
        assert_eq!(eval_str("8+5*(13-1)*2").unwrap(), 128.0);
    }

    #[test]
    fn true_division() {
        assert_eq!(eval_str("17/2").unwrap(), 8.5);
        assert_eq!(eval_str("1/4").unwrap(), 0.25);
    }

    #[test]
    fn leaf_only() {
        assert_eq!(eval_str("007").unwrap(), 7.0);
    }

    #[test]
    fn apply_checks_divisor() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(ErrorKind::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, 2.0), Ok(0.0));
        assert_eq!(Operator::Sub.apply(2.0, 5.0), Ok(-3.0));
    }

    #[test]
    fn divisor_computed_as_zero() {
        assert_eq!(eval_str("6/(3-3)"), Err(ErrorKind::DivisionByZero));
    }

    #[test]
    fn identifier_is_unbound() {
        assert_eq!(
            eval_str("x+1"),
            Err(ErrorKind::UnboundIdentifier("x".into()))
        );
    }

    #[test]
    fn operands_evaluate_left_to_right() {
        assert_eq!(
            eval_str("a/0"),
            Err(ErrorKind::UnboundIdentifier("a".into()))
        );
        assert_eq!(
            eval_str("(1/0)+b"),
            Err(ErrorKind::DivisionByZero)
        );
    }

    #[test]
    fn long_chains() {
        let src = vec!["1"; 100_001].join("-");
        assert_eq!(eval_str(&src), Ok(1.0));

        let src = vec!["2"; 100_001].join("+");
        assert_eq!(eval_str(&src), Ok(200_002.0));
    }

    #[test]
    fn number_out_of_range() {
        assert_eq!(
            eval_str("1+99999999999999999999"),
            Err(ErrorKind::InvalidNumberLiteral("99999999999999999999".into()))
        );
    }
}

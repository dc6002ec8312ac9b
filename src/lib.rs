//! Integer arithmetic with `+ - * /` and parentheses, evaluated through a
//! tokenizer, a shunting-yard converter, a tree builder and a tree walker.

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{ErrorKind, PResult};

use syntax::{build_tree, to_postfix, tokenize};

/// Runs `src` through every stage and returns its value. The first error
/// aborts the whole evaluation.
pub fn evaluate(src: &str) -> PResult<f64> {
    let postfix = to_postfix(tokenize(src))?;
    let tree = build_tree(postfix)?;
    log::debug!("tree: {tree}");

    let value = runtime::eval_tree(&tree)?;
    log::debug!("{src} = {value}");
    Ok(value)
}

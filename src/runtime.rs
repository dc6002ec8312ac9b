mod eval;

pub use eval::eval_tree;

//! Arithmetic expression engine: validate a string, tokenize it, evaluate it
//! to an `f64`, and build a binary expression tree describing the same
//! computation. Every function here is a pure function of its input; nothing
//! is shared or retained between calls.

mod eval;
mod tree;
mod validate;

pub mod error;

pub use eval::evaluate;
pub use lexer::{Token, tokenize};
pub use tree::{ExprNode, build_tree};
pub use validate::validate;

use error::EngineResult;

/// Runs the full pipeline: validate, tokenize, evaluate. The first failure
/// surfaces; a rejected string is never tokenized.
pub fn evaluate_expression(expression: &str) -> EngineResult<f64> {
    validate(expression)?;
    evaluate(&tokenize(expression))
}

/// Like [`evaluate_expression`], but produces the expression tree instead of
/// the numeric result.
pub fn build_expression_tree(expression: &str) -> EngineResult<ExprNode> {
    validate(expression)?;
    build_tree(&tokenize(expression))
}

pub mod prelude {
    pub use crate::error::{EngineError, EngineErrorKind, EngineResult};
    pub use crate::{
        ExprNode, Token, build_expression_tree, build_tree, evaluate, evaluate_expression,
        tokenize, validate,
    };
}

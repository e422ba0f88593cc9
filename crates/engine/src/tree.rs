use std::fmt::Display;

use lexer::Token;

use crate::{
    error::EngineResult,
    eval::{Folder, fold},
};

/// A binary expression tree, built bottom-up and never mutated afterwards.
/// Leaves keep the display form of their value so a renderer can print them
/// without caring about numbers at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    Leaf(String),
    Internal {
        op: char,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    /// Number of nodes in the tree, leaves included.
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl Display for ExprNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Leaf(value) => write!(f, "{value}"),
            Self::Internal { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

struct TreeShaper;

impl Folder for TreeShaper {
    type Output = ExprNode;

    fn number(value: f64) -> ExprNode {
        ExprNode::Leaf(value.to_string())
    }

    fn apply(op: &Token, left: ExprNode, right: ExprNode) -> ExprNode {
        let op = match op {
            Token::Plus => '+',
            Token::Minus => '-',
            Token::Asterisk => '*',
            Token::Slash => '/',
            Token::Modulo => '%',
            Token::Caret => '^',
            _ => unreachable!("fold only reduces operator tokens"),
        };
        ExprNode::Internal {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Builds the expression tree for a token stream. Runs the same fold as
/// [`evaluate`](crate::evaluate), so the two can never disagree about which
/// operation applies when, and they fail on exactly the same inputs.
pub fn build_tree(tokens: &[Token]) -> EngineResult<ExprNode> {
    fold::<TreeShaper>(tokens)
}

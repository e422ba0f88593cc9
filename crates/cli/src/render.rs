//! Plain-text views of the engine's output: the token line and a sideways
//! drawing of the expression tree. Both only read the values they are given.

use arbor_lib::prelude::*;

pub fn token_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the tree top-down, one node per line, children connected with
/// `+-`/`` `- `` rails.
pub fn tree_lines(tree: &ExprNode) -> Vec<String> {
    let mut lines = vec![label(tree)];
    if let ExprNode::Internal { left, right, .. } = tree {
        branch(left, "", false, &mut lines);
        branch(right, "", true, &mut lines);
    }
    lines
}

fn label(node: &ExprNode) -> String {
    match node {
        ExprNode::Leaf(value) => value.clone(),
        ExprNode::Internal { op, .. } => op.to_string(),
    }
}

fn branch(node: &ExprNode, prefix: &str, last: bool, lines: &mut Vec<String>) {
    let connector = if last { "`- " } else { "+- " };
    lines.push(format!("{prefix}{connector}{}", label(node)));
    if let ExprNode::Internal { left, right, .. } = node {
        let extension = if last { "   " } else { "|  " };
        let prefix = format!("{prefix}{extension}");
        branch(left, &prefix, false, lines);
        branch(right, &prefix, true, lines);
    }
}

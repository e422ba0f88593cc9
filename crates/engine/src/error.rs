use std::fmt::Display;

pub type EngineResult<T> = Result<T, EngineError>;

/// A failure from any stage of the pipeline. The kind records which rule was
/// broken; the message is what gets shown to a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    IllegalCharacter,
    UnbalancedParentheses,
    UnmatchedParenthesis,
    EmptyExpression,
    MalformedExpression,
}

impl EngineError {
    pub fn illegal_character(expression: &str) -> Self {
        Self {
            kind: EngineErrorKind::IllegalCharacter,
            msg: format!("Invalid characters in expression: {expression:?}"),
        }
    }

    pub fn unbalanced_parentheses() -> Self {
        Self {
            kind: EngineErrorKind::UnbalancedParentheses,
            msg: "Unbalanced parentheses".into(),
        }
    }

    pub fn unmatched_parenthesis() -> Self {
        Self {
            kind: EngineErrorKind::UnmatchedParenthesis,
            msg: "Closing parenthesis without a matching opening one".into(),
        }
    }

    pub fn empty_expression() -> Self {
        Self {
            kind: EngineErrorKind::EmptyExpression,
            msg: "Nothing to evaluate".into(),
        }
    }

    pub fn malformed_expression() -> Self {
        Self {
            kind: EngineErrorKind::MalformedExpression,
            msg: "Malformed expression: operands and operators don't line up".into(),
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for EngineError {}

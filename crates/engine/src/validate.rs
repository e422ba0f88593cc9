use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EngineError, EngineResult};

// Digits, the six operators, parentheses, decimal points, and whitespace.
// `*` rather than `+` so the empty string passes; emptiness is the
// evaluator's problem, not a character-level one.
static LEGAL_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/%^().\s]*$").unwrap());

/// Checks that an expression only contains legal characters and that its
/// parentheses balance. Runs strictly before tokenization, so the lexer never
/// sees anything it would reject.
pub fn validate(expression: &str) -> EngineResult<()> {
    if !LEGAL_EXPRESSION.is_match(expression) {
        return Err(EngineError::illegal_character(expression));
    }

    let mut depth: i64 = 0;
    for ch in expression.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        // A `)` with no prior `(` can never rebalance.
        if depth < 0 {
            return Err(EngineError::unbalanced_parentheses());
        }
    }

    if depth != 0 {
        return Err(EngineError::unbalanced_parentheses());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineErrorKind;

    #[test]
    fn accepts_plain_arithmetic() {
        assert_eq!(validate("3 + 4 * 2"), Ok(()));
        assert_eq!(validate("(3.5 / 2) ^ 2 % 7 - 1"), Ok(()));
    }

    #[test]
    fn accepts_empty_and_blank() {
        assert_eq!(validate(""), Ok(()));
        assert_eq!(validate("   \t "), Ok(()));
    }

    #[test]
    fn rejects_illegal_characters() {
        for bad in ["3 + x", "1 & 2", "two", "3 = 3", "[1]"] {
            let err = validate(bad).unwrap_err();
            assert_eq!(err.kind, EngineErrorKind::IllegalCharacter);
        }
    }

    #[test]
    fn rejects_unclosed_paren() {
        let err = validate("3 + (4 * 2").unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::UnbalancedParentheses);
    }

    #[test]
    fn rejects_early_close() {
        let err = validate(")").unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::UnbalancedParentheses);

        // Balanced overall, but the close comes first.
        let err = validate(")(").unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::UnbalancedParentheses);
    }

    #[test]
    fn accepts_nested_parens() {
        assert_eq!(validate("((1 + 2) * (3 + 4))"), Ok(()));
    }
}

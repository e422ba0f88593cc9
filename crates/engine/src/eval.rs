use lexer::Token;

use crate::error::{EngineError, EngineResult};

/// The seam between evaluating an expression and building its tree. Both walk
/// the token stream through the same [`fold`] driver; a `Folder` only decides
/// what an operand becomes and what applying an operator produces.
pub(crate) trait Folder {
    type Output;

    fn number(value: f64) -> Self::Output;
    fn apply(op: &Token, left: Self::Output, right: Self::Output) -> Self::Output;
}

/// Two-stack precedence fold over a token stream.
///
/// Numbers push onto the operand stack. An opening parenthesis goes onto the
/// operator stack as a scope marker; a closing one reduces until its marker.
/// An incoming operator first reduces every stacked operator of greater *or
/// equal* precedence, which makes every operator left-associative, `^`
/// included. Whatever operators remain at the end are reduced left to right
/// as popped.
pub(crate) fn fold<F: Folder>(tokens: &[Token]) -> EngineResult<F::Output> {
    if tokens.is_empty() {
        return Err(EngineError::empty_expression());
    }

    let mut operands: Vec<F::Output> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => operands.push(F::number(*value)),
            Token::LParens => operators.push(Token::LParens),
            Token::RParens => loop {
                match operators.pop() {
                    Some(Token::LParens) => break,
                    Some(op) => reduce::<F>(&op, &mut operands)?,
                    // Unreachable after validation, but defended: a close
                    // with no open marker left on the stack.
                    None => return Err(EngineError::unmatched_parenthesis()),
                }
            },
            incoming => {
                // The marker's precedence is 0, so reduction never crosses
                // an open parenthesis.
                while let Some(top) =
                    operators.pop_if(|top| top.precedence() >= incoming.precedence())
                {
                    reduce::<F>(&top, &mut operands)?;
                }
                operators.push(incoming.clone());
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op == Token::LParens {
            return Err(EngineError::unmatched_parenthesis());
        }
        reduce::<F>(&op, &mut operands)?;
    }

    // Exactly one operand must remain; anything else means the operand and
    // operator counts never lined up (`"3 +"`, `"3 4"`).
    match (operands.pop(), operands.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(EngineError::malformed_expression()),
    }
}

fn reduce<F: Folder>(op: &Token, operands: &mut Vec<F::Output>) -> EngineResult<()> {
    let right = operands.pop().ok_or_else(EngineError::malformed_expression)?;
    let left = operands.pop().ok_or_else(EngineError::malformed_expression)?;
    operands.push(F::apply(op, left, right));
    Ok(())
}

struct Arithmetic;

impl Folder for Arithmetic {
    type Output = f64;

    fn number(value: f64) -> f64 {
        value
    }

    fn apply(op: &Token, left: f64, right: f64) -> f64 {
        match op {
            Token::Plus => left + right,
            Token::Minus => left - right,
            Token::Asterisk => left * right,
            Token::Slash => left / right,
            Token::Modulo => left % right,
            Token::Caret => left.powf(right),
            _ => unreachable!("fold only reduces operator tokens"),
        }
    }
}

/// Evaluates a token stream to a single numeric result.
///
/// Division and remainder by zero are not errors here; they produce the
/// non-finite values IEEE 754 says they do, and the caller decides how to
/// show them.
pub fn evaluate(tokens: &[Token]) -> EngineResult<f64> {
    fold::<Arithmetic>(tokens)
}

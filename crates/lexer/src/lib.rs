use std::fmt::Display;

use logos::{Lexer, Logos};

fn number(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// All the Tokens the lexer can produce.
///
/// A number is the longest run of digits, optionally followed by a decimal
/// point and more digits. Whitespace is skipped and never surfaces as a token.
#[rustfmt::skip]
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[regex(r"\d+\.?\d*", number)]  Number(f64),

    // Operators
    #[token("+")]                   Plus,
    #[token("-")]                   Minus,
    #[token("*")]                   Asterisk,
    #[token("/")]                   Slash,
    #[token("%")]                   Modulo,
    #[token("^")]                   Caret,

    // Brackets
    #[token("(")]                   LParens,
    #[token(")")]                   RParens,
}

impl Token {
    /// Binding strength used by the evaluation fold. `LParens` and `Number`
    /// report 0 so they never win a precedence comparison.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Caret => 3,
            Self::Asterisk | Self::Slash | Self::Modulo => 2,
            Self::Plus | Self::Minus => 1,
            _ => 0,
        }
    }

}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Asterisk => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Modulo => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParens => write!(f, "("),
            Self::RParens => write!(f, ")"),
        }
    }
}

/// Lexes the source string into a vector of tokens, ignoring any lexical
/// errors. Callers validate the string first, so nothing the lexer would
/// reject can be present.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        let mut lex = Token::lexer("3 42 007");

        assert_eq!(lex.next(), Some(Ok(Token::Number(3.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(42.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(7.0))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn decimals() {
        let mut lex = Token::lexer("3.50 0.25 9.");

        assert_eq!(lex.next(), Some(Ok(Token::Number(3.5))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(0.25))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(9.0))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn operators() {
        let mut lex = Token::lexer("+ - * / % ^");

        assert_eq!(lex.next(), Some(Ok(Token::Plus)));
        assert_eq!(lex.next(), Some(Ok(Token::Minus)));
        assert_eq!(lex.next(), Some(Ok(Token::Asterisk)));
        assert_eq!(lex.next(), Some(Ok(Token::Slash)));
        assert_eq!(lex.next(), Some(Ok(Token::Modulo)));
        assert_eq!(lex.next(), Some(Ok(Token::Caret)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn brackets() {
        let mut lex = Token::lexer("()");

        assert_eq!(lex.next(), Some(Ok(Token::LParens)));
        assert_eq!(lex.next(), Some(Ok(Token::RParens)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn no_whitespace_needed() {
        let mut lex = Token::lexer("(3+4.5)*2");

        assert_eq!(lex.next(), Some(Ok(Token::LParens)));
        assert_eq!(lex.next(), Some(Ok(Token::Number(3.0))));
        assert_eq!(lex.next(), Some(Ok(Token::Plus)));
        assert_eq!(lex.next(), Some(Ok(Token::Number(4.5))));
        assert_eq!(lex.next(), Some(Ok(Token::RParens)));
        assert_eq!(lex.next(), Some(Ok(Token::Asterisk)));
        assert_eq!(lex.next(), Some(Ok(Token::Number(2.0))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn tokenize_skips_whitespace() {
        assert_eq!(
            tokenize(" 3 +\t4 "),
            vec![Token::Number(3.0), Token::Plus, Token::Number(4.0)]
        );
    }

    #[test]
    fn tokenize_empty_and_blank() {
        assert_eq!(tokenize(""), Vec::<Token>::new());
        assert_eq!(tokenize("   \t  "), Vec::<Token>::new());
    }

    #[test]
    fn tokenize_is_idempotent() {
        let source = "(3 + 4.25) * 2 ^ 5 % 6";
        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn precedence_ordering() {
        assert!(Token::Caret.precedence() > Token::Asterisk.precedence());
        assert_eq!(Token::Asterisk.precedence(), Token::Slash.precedence());
        assert_eq!(Token::Slash.precedence(), Token::Modulo.precedence());
        assert!(Token::Modulo.precedence() > Token::Plus.precedence());
        assert_eq!(Token::Plus.precedence(), Token::Minus.precedence());
        assert_eq!(Token::LParens.precedence(), 0);
        assert_eq!(Token::Number(1.0).precedence(), 0);
    }
}

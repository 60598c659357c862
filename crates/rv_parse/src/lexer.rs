//! Lexer for the expression language using logos.

use logos::Logos;

use crate::error::{ParseError, Span};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Token<'src> {
    // === Keywords ===
    #[token("given")]
    Given,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Literals ===
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    // === Operators ===
    #[token("**")]
    StarStar,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Tokenize `source`, failing on the first character no token matches.
pub(crate) fn lex(source: &str) -> Result<Vec<(Token<'_>, Span)>, ParseError> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(ParseError::InvalidToken {
                text: source[span.clone()].to_string(),
                span,
            }),
        })
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::{lex, Token};
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<Token<'_>> {
        lex(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn operators_prefer_longest_match() {
        assert_eq!(
            kinds("X ** 2 * Y"),
            vec![
                Token::Ident("X"),
                Token::StarStar,
                Token::Number(2.0),
                Token::Star,
                Token::Ident("Y"),
            ]
        );
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(
            kinds("given givens true"),
            vec![Token::Given, Token::Ident("givens"), Token::True]
        );
    }

    #[test]
    fn numbers_with_exponents() {
        assert_eq!(
            kinds("1.5e3 0.25"),
            vec![Token::Number(1500.0), Token::Number(0.25)]
        );
    }

    #[test]
    fn unknown_character_reports_span() {
        let err = lex("X + $").unwrap_err();
        assert_eq!(err.span(), Some(4..5));
    }
}

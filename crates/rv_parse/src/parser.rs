//! Recursive descent parser with precedence climbing for binary operators.
//!
//! `given` binds loosest of all and groups to the right, so
//! `A given B given C` reads as `A given (B given C)`, which the IR flattens
//! to `A given (B & C)`.

use rv_ir::{BinaryOp, Expr, Operand, Scalar};
use tracing::trace;

use crate::declarations::Declarations;
use crate::error::{ParseError, Span};
use crate::lexer::Token;

/// Loosest binary operator level.
const LOWEST_PREC: u8 = 11;

/// Parser state.
pub(crate) struct Parser<'src, 'd> {
    source: &'src str,
    tokens: Vec<(Token<'src>, Span)>,
    declarations: &'d Declarations,
    /// Current token index.
    pos: usize,
}

impl<'src, 'd> Parser<'src, 'd> {
    pub(crate) fn new(
        source: &'src str,
        tokens: Vec<(Token<'src>, Span)>,
        declarations: &'d Declarations,
    ) -> Self {
        Parser {
            source,
            tokens,
            declarations,
            pos: 0,
        }
    }

    /// Parse the whole input as one expression.
    pub(crate) fn parse_expression(mut self) -> Result<Expr, ParseError> {
        let operand = self.given()?;
        if let Some((_, span)) = self.current() {
            return Err(self.unexpected(span.clone(), "end of input"));
        }
        match operand {
            Operand::Node(expr) => Ok(expr),
            Operand::Literal(_) => Err(ParseError::BareLiteral {
                text: self.source.trim().to_string(),
            }),
        }
    }

    // ===== Token access =====

    fn current(&self) -> Option<&(Token<'src>, Span)> {
        self.tokens.get(self.pos)
    }

    fn current_token(&self) -> Option<Token<'src>> {
        self.current().map(|(token, _)| *token)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn consume(
        &mut self,
        expected_token: Token<'src>,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        match self.current().cloned() {
            Some((token, _)) if token == expected_token => {
                self.advance();
                Ok(())
            }
            Some((_, span)) => Err(self.unexpected(span, expected)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn unexpected(&self, span: Span, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.source[span.clone()].to_string(),
            expected,
            span,
        }
    }

    // ===== Expression parsing =====

    fn given(&mut self) -> Result<Operand, ParseError> {
        let clause = self.parse_precedence(LOWEST_PREC)?;
        if self.current_token() != Some(Token::Given) {
            return Ok(clause);
        }
        self.advance();
        let condition = self.given()?;
        Ok(Operand::Node(Expr::given(clause, condition)))
    }

    fn parse_precedence(&mut self, max_prec: u8) -> Result<Operand, ParseError> {
        let mut left = self.unary()?;

        while let Some((op, prec)) = self.binary_op() {
            if prec > max_prec {
                break;
            }

            self.advance();

            let right = if op.is_left_assoc() {
                self.parse_precedence(prec - 1)?
            } else {
                self.parse_precedence(prec)?
            };

            left = Operand::Node(Expr::binary(op, left, right));
        }

        Ok(left)
    }

    fn binary_op(&self) -> Option<(BinaryOp, u8)> {
        let op = match self.current_token()? {
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::StarStar => BinaryOp::Pow,
            Token::Lt => BinaryOp::Lt,
            Token::Gt => BinaryOp::Gt,
            Token::Amp => BinaryOp::And,
            Token::Pipe => BinaryOp::Or,
            _ => return None,
        };
        Some((op, op.precedence()))
    }

    /// Negation covers a whole power, so `-X ** 2` is `-(X ** 2)`.
    fn unary(&mut self) -> Result<Operand, ParseError> {
        if self.current_token() != Some(Token::Minus) {
            return self.primary();
        }
        self.advance();
        let operand = self.parse_precedence(BinaryOp::Pow.precedence())?;
        Ok(match operand {
            Operand::Literal(Scalar::Float(x)) => Operand::Literal(Scalar::Float(-x)),
            other => Operand::Node(Expr::binary(BinaryOp::Mul, -1.0, other)),
        })
    }

    fn primary(&mut self) -> Result<Operand, ParseError> {
        let Some((token, span)) = self.current().cloned() else {
            return Err(ParseError::UnexpectedEnd {
                expected: "an expression",
            });
        };
        let operand = match token {
            Token::Number(x) => Operand::from(x),
            Token::True => Operand::from(true),
            Token::False => Operand::from(false),
            Token::Ident(name) => {
                let var = self.declarations.lookup(name);
                trace!(?var, "resolved identifier");
                Operand::from(var)
            }
            Token::LParen => {
                self.advance();
                let inner = self.given()?;
                self.consume(Token::RParen, "`)`")?;
                return Ok(inner);
            }
            _ => return Err(self.unexpected(span, "an expression")),
        };
        self.advance();
        Ok(operand)
    }
}

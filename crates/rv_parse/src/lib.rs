//! Text front end for random-variable expressions.
//!
//! Turns source such as `X ** 2 given X > 0` into an [`rv_ir::Expr`]. The
//! grammar, loosest first:
//!
//! ```text
//! expr    := logical ("given" expr)?
//! logical := binary operators `|` `&` `<` `>` `+` `-` `*` `/` `**`
//! unary   := "-" unary | primary
//! primary := number | "true" | "false" | ident | "(" expr ")"
//! ```
//!
//! Identifiers resolve through [`Declarations`]; anything undeclared becomes
//! a symbol.

mod declarations;
mod error;
mod lexer;
mod parser;

pub use declarations::Declarations;
pub use error::{ParseError, Span};

use rv_ir::Expr;
use tracing::debug;

/// Parse `source` into an expression tree.
///
/// # Examples
///
/// ```
/// use rv_parse::{parse, Declarations};
///
/// let decls = Declarations::new().normal("X");
/// let expr = parse("X - X", &decls).unwrap();
/// assert_eq!(expr.unique_vars().len(), 1);
/// ```
pub fn parse(source: &str, declarations: &Declarations) -> Result<Expr, ParseError> {
    let tokens = lexer::lex(source)?;
    debug!(tokens = tokens.len(), "lexed expression");
    parser::Parser::new(source, tokens, declarations).parse_expression()
}

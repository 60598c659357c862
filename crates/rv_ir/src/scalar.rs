//! Concrete values and operand slots.

use std::fmt;

use crate::expr::{Expr, VarSet};
use crate::variable::Variable;

/// A concrete value produced by sampling or substitution.
///
/// Integer literals are widened to `Float`; there is no separate integer
/// kind because every draw is real-valued.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Name of the value kind, used in error messages.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }

    pub const fn as_f64(self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(x),
            Self::Bool(_) => None,
        }
    }

    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<i32> for Scalar {
    fn from(x: i32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One operand slot of a node, and the result of substituting into a node.
///
/// A slot either holds a literal scalar or a nested expression. Substitution
/// returns `Literal` once everything below a node is bound, and `Node` with a
/// simplified residual tree otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Literal(Scalar),
    Node(Expr),
}

impl Operand {
    /// Variables reachable from this operand. Literals contribute none.
    pub fn unique_vars(&self) -> Option<&VarSet> {
        match self {
            Self::Literal(_) => None,
            Self::Node(expr) => Some(expr.unique_vars()),
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Literal(s) => Some(*s),
            Self::Node(_) => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Literal(_) => None,
            Self::Node(expr) => Some(expr),
        }
    }

    /// Whether this operand is a node with unbound variables in it.
    ///
    /// Literal-only nodes such as `{ 4 ; true }` are not symbolic.
    pub fn is_symbolic(&self) -> bool {
        self.unique_vars().is_some_and(|vars| !vars.is_empty())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => fmt::Display::fmt(s, f),
            Self::Node(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl From<Scalar> for Operand {
    fn from(s: Scalar) -> Self {
        Self::Literal(s)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Self::Literal(x.into())
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Self::Literal(x.into())
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Self::Literal(b.into())
    }
}

impl From<Expr> for Operand {
    fn from(expr: Expr) -> Self {
        Self::Node(expr)
    }
}

impl From<&Expr> for Operand {
    fn from(expr: &Expr) -> Self {
        Self::Node(expr.clone())
    }
}

impl From<Variable> for Operand {
    fn from(var: Variable) -> Self {
        Self::Node(Expr::from(var))
    }
}

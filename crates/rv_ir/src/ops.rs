//! Operator overloading for `Expr`.
//!
//! `+ - * /` and `& |` build nodes through `Expr::binary`, with the literal
//! reflected forms (`1.0 + x`, `true & x`) keeping the literal on the left.
//! `**`, `<` and `>` have no Rust operator that can return a node; they are
//! the `pow`/`lt`/`gt` methods on `Expr` and `ReflectedOps` on literals.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Sub};

use crate::expr::Expr;
use crate::operators::BinaryOp;
use crate::scalar::{Operand, Scalar};

macro_rules! impl_expr_operator {
    ($($trait:ident::$method:ident => $op:expr),* $(,)?) => {$(
        impl<R: Into<Operand>> $trait<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl<R: Into<Operand>> $trait<R> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }
    )*};
}

macro_rules! impl_reflected_operator {
    ($lhs:ty: $($trait:ident::$method:ident => $op:expr),* $(,)?) => {$(
        impl $trait<Expr> for $lhs {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<&Expr> for $lhs {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }
    )*};
}

impl_expr_operator! {
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Sub,
    Mul::mul => BinaryOp::Mul,
    Div::div => BinaryOp::Div,
    BitOr::bitor => BinaryOp::Or,
    BitAnd::bitand => BinaryOp::And,
}

impl_reflected_operator! { f64:
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Sub,
    Mul::mul => BinaryOp::Mul,
    Div::div => BinaryOp::Div,
}

impl_reflected_operator! { i32:
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Sub,
    Mul::mul => BinaryOp::Mul,
    Div::div => BinaryOp::Div,
}

impl_reflected_operator! { bool:
    BitOr::bitor => BinaryOp::Or,
    BitAnd::bitand => BinaryOp::And,
}

/// Literal-on-the-left forms of the method operators.
///
/// `2.0_f64.pow_expr(&x)` is `Pow(2, X)`. The comparisons follow the mirror
/// rule: `0.5_f64.lt_expr(&u)` is built as `u.gt(0.5)`.
pub trait ReflectedOps: Into<Scalar> {
    fn pow_expr(self, exponent: &Expr) -> Expr {
        Expr::binary(BinaryOp::Pow, self.into(), exponent)
    }

    fn lt_expr(self, rhs: &Expr) -> Expr {
        reflect(BinaryOp::Lt, self.into(), rhs)
    }

    fn gt_expr(self, rhs: &Expr) -> Expr {
        reflect(BinaryOp::Gt, self.into(), rhs)
    }
}

impl ReflectedOps for f64 {}
impl ReflectedOps for i32 {}

fn reflect(op: BinaryOp, lhs: Scalar, rhs: &Expr) -> Expr {
    match op.mirrored() {
        Some(mirror) => Expr::binary(mirror, rhs, lhs),
        None => Expr::binary(op, lhs, rhs),
    }
}

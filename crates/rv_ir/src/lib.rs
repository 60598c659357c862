//! RV IR - expression trees over random variables.
//!
//! This crate contains the data model shared by the evaluator, the parser and
//! the command-line driver:
//! - `Scalar` and `Operand` for concrete values and operand slots
//! - `BinaryOp` for the operator set
//! - `Variable` and `Distribution` for named random leaves
//! - `Expr` for immutable, shareable expression nodes
//!
//! # Design Philosophy
//!
//! - **Immutable nodes**: every operator returns a new `Expr`; nodes are shared
//!   through `Arc` and never mutated after construction.
//! - **Cached variable sets**: each node stores the deduplicated set of
//!   variables reachable from it, computed once when the node is built.
//! - **Identity by value**: two variables are the same variable when their
//!   distribution kind and name match, regardless of where they were created.

mod expr;
mod operators;
mod ops;
mod scalar;
mod stack;
mod variable;

pub use expr::{Expr, ExprKind, VarSet};
pub use operators::BinaryOp;
pub use ops::ReflectedOps;
pub use scalar::{Operand, Scalar};
pub use stack::ensure_sufficient_stack;
pub use variable::{DrawFn, Distribution, Variable};

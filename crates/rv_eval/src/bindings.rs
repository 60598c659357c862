//! Variable bindings for substitution.

use rustc_hash::FxHashMap;
use rv_ir::{Operand, Scalar, Variable};

/// A mapping from variables to the operands that replace them.
///
/// Keys use `Variable`'s kind-and-name identity, so a binding made through one
/// `Variable` value applies to every equal variable in a tree. Values are
/// usually sampled scalars but may be whole expressions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    values: FxHashMap<Variable, Operand>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Bind `var`, returning the previous binding if there was one.
    pub fn bind(&mut self, var: Variable, value: impl Into<Operand>) -> Option<Operand> {
        self.values.insert(var, value.into())
    }

    /// Builder form of [`bind`](Self::bind).
    #[must_use]
    pub fn with(mut self, var: Variable, value: impl Into<Operand>) -> Self {
        self.bind(var, value);
        self
    }

    pub fn get(&self, var: &Variable) -> Option<&Operand> {
        self.values.get(var)
    }

    /// The bound scalar, if `var` is bound to a literal.
    pub fn scalar(&self, var: &Variable) -> Option<Scalar> {
        self.get(var).and_then(Operand::as_scalar)
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.values.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Operand)> {
        self.values.iter()
    }
}

impl FromIterator<(Variable, Operand)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (Variable, Operand)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

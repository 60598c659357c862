//! Names bound to distributions before parsing.

use rustc_hash::FxHashMap;
use rv_ir::{Distribution, Variable};

/// Maps identifiers to the distribution they are drawn from.
///
/// Names not declared here parse as [`Distribution::Symbol`] variables,
/// which substitute fine but cannot be sampled.
#[derive(Clone, Debug, Default)]
pub struct Declarations {
    names: FxHashMap<String, Distribution>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name`, replacing any earlier declaration.
    pub fn declare(&mut self, name: impl Into<String>, distribution: Distribution) -> &mut Self {
        self.names.insert(name.into(), distribution);
        self
    }

    #[must_use]
    pub fn uniform(mut self, name: impl Into<String>) -> Self {
        self.declare(name, Distribution::Uniform);
        self
    }

    #[must_use]
    pub fn normal(mut self, name: impl Into<String>) -> Self {
        self.declare(name, Distribution::Normal);
        self
    }

    #[must_use]
    pub fn symbol(mut self, name: impl Into<String>) -> Self {
        self.declare(name, Distribution::Symbol);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Distribution> {
        self.names.get(name)
    }

    /// The variable `name` refers to.
    pub fn lookup(&self, name: &str) -> Variable {
        let distribution = self.get(name).cloned().unwrap_or(Distribution::Symbol);
        Variable::new(name, distribution)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

//! Named random variables and the distributions they draw from.
//!
//! # Identity
//!
//! A `Variable` is identified by its distribution kind and its name. Two
//! separately constructed `Variable::normal("X")` values are the same
//! variable: they compare equal, hash equally and bind to the same draw
//! within one sample. `Eq`, `Hash` and `Ord` are written together over the
//! same key so that they can never disagree.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rand::{Rng, RngCore};
use rand_distr::StandardNormal;

/// A user-supplied draw function for `Distribution::Custom`.
pub type DrawFn = Arc<dyn Fn(&mut dyn RngCore) -> f64 + Send + Sync>;

/// The distribution a variable draws from.
#[derive(Clone)]
pub enum Distribution {
    /// Standard uniform on `[0, 1)`.
    Uniform,
    /// Standard normal.
    Normal,
    /// A placeholder with no distribution. Can be substituted, never sampled.
    Symbol,
    /// An arbitrary draw function. `label` takes the place of the kind in the
    /// variable's identity, so two custom variables with the same name but
    /// different labels are different variables.
    Custom { label: Arc<str>, draw: DrawFn },
}

impl Distribution {
    pub fn custom(
        label: impl Into<Arc<str>>,
        draw: impl Fn(&mut dyn RngCore) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::Custom {
            label: label.into(),
            draw: Arc::new(draw),
        }
    }

    /// Identity key: discriminant plus the custom label, if any.
    fn key(&self) -> (u8, &str) {
        match self {
            Self::Uniform => (0, ""),
            Self::Normal => (1, ""),
            Self::Symbol => (2, ""),
            Self::Custom { label, .. } => (3, label),
        }
    }

    /// Human-readable kind, e.g. `normal` or the custom label.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Uniform => "uniform",
            Self::Normal => "normal",
            Self::Symbol => "symbol",
            Self::Custom { label, .. } => label,
        }
    }

    /// Draw one value, or `None` for a `Symbol`.
    pub fn draw(&self, rng: &mut dyn RngCore) -> Option<f64> {
        match self {
            Self::Uniform => Some(rng.gen::<f64>()),
            Self::Normal => Some(rng.sample::<f64, _>(StandardNormal)),
            Self::Symbol => None,
            Self::Custom { draw, .. } => Some(draw(rng)),
        }
    }
}

impl PartialEq for Distribution {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Distribution {}

impl fmt::Debug for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => f.write_str("Uniform"),
            Self::Normal => f.write_str("Normal"),
            Self::Symbol => f.write_str("Symbol"),
            Self::Custom { label, .. } => f.debug_tuple("Custom").field(label).finish(),
        }
    }
}

/// A named random variable.
#[derive(Clone)]
pub struct Variable {
    name: Arc<str>,
    distribution: Distribution,
}

impl Variable {
    pub fn new(name: impl Into<Arc<str>>, distribution: Distribution) -> Self {
        Self {
            name: name.into(),
            distribution,
        }
    }

    pub fn uniform(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, Distribution::Uniform)
    }

    pub fn normal(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, Distribution::Normal)
    }

    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, Distribution::Symbol)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    fn key(&self) -> ((u8, &str), &str) {
        (self.distribution.key(), &self.name)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.distribution, self.name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

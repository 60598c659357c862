//! Binary operators.
//!
//! All operators an expression node can carry. Evaluation lives in
//! `rv_eval::operators`; this module only names them and renders them.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Comparison
    Lt,
    Gt,

    // Logical
    Or,
    And,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 9] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Pow,
        Self::Lt,
        Self::Gt,
        Self::Or,
        Self::And,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used by `Display` for expression nodes and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Or => "|",
            Self::And => "&",
        }
    }

    /// Whether this operator produces a boolean from two numbers.
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Gt)
    }

    /// Whether this operator consumes and produces booleans.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::Or | Self::And)
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 2: `**`
    /// - 3: `*` `/`
    /// - 4: `+` `-`
    /// - 7: `<` `>`
    /// - 9: `&`
    /// - 11: `|`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 2,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 4,
            Self::Lt | Self::Gt => 7,
            Self::And => 9,
            Self::Or => 11,
        }
    }

    /// `**` groups to the right; everything else to the left.
    pub const fn is_left_assoc(self) -> bool {
        !matches!(self, Self::Pow)
    }

    /// The operator to use when the operands are swapped.
    ///
    /// `<` and `>` mirror each other; every other operator keeps its kind and
    /// is built with the literal on the left instead.
    pub const fn mirrored(self) -> Option<BinaryOp> {
        match self {
            Self::Lt => Some(Self::Gt),
            Self::Gt => Some(Self::Lt),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryOp;

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<_> = BinaryOp::ALL.iter().map(|op| op.as_symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), BinaryOp::ALL.len());
    }

    #[test]
    fn comparisons_mirror_each_other() {
        assert_eq!(BinaryOp::Lt.mirrored(), Some(BinaryOp::Gt));
        assert_eq!(BinaryOp::Gt.mirrored(), Some(BinaryOp::Lt));
        assert_eq!(BinaryOp::Sub.mirrored(), None);
    }

    #[test]
    fn categories() {
        assert!(BinaryOp::Lt.is_comparison());
        assert!(BinaryOp::And.is_logical());
        assert!(!BinaryOp::Pow.is_logical());
        assert!(!BinaryOp::Or.is_comparison());
    }
}

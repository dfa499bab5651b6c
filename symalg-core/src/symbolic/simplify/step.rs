#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step taken while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `--a = a`
    DoubleNegation,

    /// `-(-5) = 5`
    NegateNegativeLiteral,

    /// `x*x*x = x^3`
    CombineRepeatedVariables,
}

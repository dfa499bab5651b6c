use crate::numerical::{Number, NumericalError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A transcendental or magnitude function of one argument, applied with [`Expr::Unary`].
///
/// [`Expr::Unary`]: super::Expr::Unary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryFn {
    /// The natural logarithm.
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,

    /// The absolute value, or magnitude of a complex number.
    Abs,
}

impl UnaryFn {
    /// Every unary function.
    pub const ALL: [UnaryFn; 11] = [
        Self::Log,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Abs,
    ];

    /// The name of the function, as it is written when rendering an expression.
    pub fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Abs => "abs",
        }
    }

    /// Applies the function to a number.
    pub fn apply(self, n: Number) -> Result<Number, NumericalError> {
        match self {
            Self::Log => n.ln(),
            Self::Sin => n.sin(),
            Self::Cos => n.cos(),
            Self::Tan => n.tan(),
            Self::Asin => n.asin(),
            Self::Acos => n.acos(),
            Self::Atan => n.atan(),
            Self::Sinh => n.sinh(),
            Self::Cosh => n.cosh(),
            Self::Tanh => n.tanh(),
            Self::Abs => Ok(n.abs()),
        }
    }
}

impl std::fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

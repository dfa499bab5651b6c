use crate::error::{kind::{DivisionByZero, Incomparable, NotImplemented}, Error};
use crate::symbolic::expr::Expr;

/// Represents an error that can occur while computing with [`Scalar`]s and [`Number`]s.
///
/// These errors are not tied to any expression; use [`NumericalError::into_error`] to attach the
/// expression being evaluated when the error occurred.
///
/// [`Scalar`]: super::scalar::Scalar
/// [`Number`]: super::number::Number
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalError {
    /// An exact whole number was divided by zero.
    DivisionByZero(DivisionByZero),

    /// Two numbers with no ordering between them were compared.
    Incomparable(Incomparable),

    /// The operation has no defined result for the operand.
    NotImplemented(NotImplemented),
}

impl NumericalError {
    /// Creates a [`NumericalError::NotImplemented`] for the given operation and operand.
    pub(crate) fn not_implemented(operation: &str, operand: impl ToString) -> Self {
        Self::NotImplemented(NotImplemented {
            operation: operation.to_string(),
            operand: operand.to_string(),
        })
    }

    /// Convert the [`NumericalError`] into an [`Error`], attaching the given expression.
    pub fn into_error(self, expr: &Expr) -> Error {
        self.into_error_at(Some(expr.clone()))
    }

    /// Convert the [`NumericalError`] into an [`Error`], optionally attaching an expression.
    pub fn into_error_at(self, expr: Option<Expr>) -> Error {
        match self {
            Self::DivisionByZero(e) => Error::new(expr, e),
            Self::Incomparable(e) => Error::new(expr, e),
            Self::NotImplemented(e) => Error::new(expr, e),
        }
    }
}

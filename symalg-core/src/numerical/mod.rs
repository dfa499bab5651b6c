//! The numeric tower: exact-or-real [`Scalar`]s, and [`Number`]s over the real, imaginary, and
//! complex numbers built from them.

pub mod error;
pub mod number;
pub mod scalar;

pub use error::NumericalError;
pub use number::Number;
pub use scalar::Scalar;

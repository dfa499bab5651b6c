use crate::error::kind::DivisionByZero;
use crate::primitive::{float, int};
use rug::{ops::Pow, Float, Integer};
use std::{cmp::Ordering, fmt, ops::{Add, Mul, Neg, Sub}};
use super::error::NumericalError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A real value that is either an exact whole number or a floating-point number.
///
/// Arithmetic between two [`Scalar::Whole`]s stays exact whenever the result is a whole number.
/// Any [`Scalar::Real`] operand, or a division with a nonzero remainder, promotes the result to a
/// [`Scalar::Real`].
///
/// Equality and ordering compare across the two kinds by numeric value, so `Whole(2)` equals
/// `Real(2.0)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scalar {
    /// An exact whole number, such as `2` or `-144`.
    Whole(Integer),

    /// A floating-point number, such as `3.14` or `0.5`.
    Real(Float),
}

impl Scalar {
    /// The exact zero.
    pub fn zero() -> Self {
        Self::Whole(int(0))
    }

    /// The exact one.
    pub fn one() -> Self {
        Self::Whole(int(1))
    }

    /// Returns true if the scalar is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Whole(n) => n.is_zero(),
            Self::Real(n) => n.is_zero(),
        }
    }

    /// Returns true if the scalar is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Whole(n) => *n < 0,
            Self::Real(n) => *n < 0,
        }
    }

    /// If the scalar is a [`Scalar::Whole`], returns a reference to the contained integer.
    pub fn as_whole(&self) -> Option<&Integer> {
        match self {
            Self::Whole(n) => Some(n),
            Self::Real(_) => None,
        }
    }

    /// Returns the value of the scalar as a [`Float`].
    pub fn to_float(&self) -> Float {
        match self {
            Self::Whole(n) => float(n),
            Self::Real(n) => float(n),
        }
    }

    /// Converts the scalar into a [`Float`].
    pub fn into_float(self) -> Float {
        match self {
            Self::Whole(n) => float(&n),
            Self::Real(n) => n,
        }
    }

    /// Returns the closest [`f64`] to the value of the scalar.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Whole(n) => n.to_f64(),
            Self::Real(n) => n.to_f64(),
        }
    }

    /// Divides this scalar by another.
    ///
    /// Dividing two whole numbers stays exact when the divisor divides the dividend. Dividing a
    /// whole number by the whole zero is an error, since there is no exact whole infinity; every
    /// other division by zero follows floating-point semantics.
    pub fn try_div(self, rhs: Self) -> Result<Self, NumericalError> {
        match (self, rhs) {
            (Self::Whole(_), Self::Whole(rhs)) if rhs.is_zero() => {
                Err(NumericalError::DivisionByZero(DivisionByZero))
            },
            (Self::Whole(lhs), Self::Whole(rhs)) if lhs.is_divisible(&rhs) => {
                Ok(Self::Whole(lhs / rhs))
            },
            (lhs, rhs) => Ok(Self::Real(lhs.into_float() / rhs.into_float())),
        }
    }

    /// Raises this scalar to the given power.
    ///
    /// A zero exponent always produces one, even for `0^0`. A whole base raised to a positive
    /// whole exponent stays exact; anything else is computed with floating-point power.
    pub fn pow(self, rhs: Self) -> Self {
        if rhs.is_zero() {
            return match (self, rhs) {
                (Self::Whole(_), Self::Whole(_)) => Self::one(),
                _ => Self::Real(float(1)),
            };
        }

        match (self, rhs) {
            (Self::Whole(base), Self::Whole(exp)) if exp > 0 => match exp.to_u32() {
                Some(exp) => Self::Whole(base.pow(exp)),
                None => Self::Real(float(&base).pow(float(&exp))),
            },
            (base, exp) => Self::Real(base.into_float().pow(exp.into_float())),
        }
    }

    /// Returns the square root of this scalar, which is exact if the scalar is a perfect square.
    pub fn sqrt(self) -> Self {
        match self {
            Self::Whole(n) if n >= 0 && n.is_perfect_square() => Self::Whole(n.sqrt()),
            n => Self::Real(n.into_float().sqrt()),
        }
    }

    /// Returns the absolute value of this scalar.
    pub fn abs(self) -> Self {
        match self {
            Self::Whole(n) => Self::Whole(n.abs()),
            Self::Real(n) => Self::Real(n.abs()),
        }
    }

    /// Returns the angle of the point `(x, self)` from the positive x-axis.
    pub fn atan2(self, x: Self) -> Self {
        Self::Real(self.into_float().atan2(&x.into_float()))
    }

    /// Applies a floating-point function to this scalar, producing a [`Scalar::Real`].
    pub fn map_real(self, f: impl FnOnce(Float) -> Float) -> Self {
        Self::Real(f(self.into_float()))
    }
}

macro_rules! impl_from_whole {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(n: $t) -> Self {
                    Self::Whole(int(n))
                }
            }
        )*
    };
}

impl_from_whole!(i32, i64, u32, u64);

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Real(float(n))
    }
}

impl From<Integer> for Scalar {
    fn from(n: Integer) -> Self {
        Self::Whole(n)
    }
}

impl From<Float> for Scalar {
    fn from(n: Float) -> Self {
        Self::Real(n)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(n) => write!(f, "{}", n),
            Self::Real(n) => write!(f, "{}", n.to_f64()),
        }
    }
}

/// Compares across [`Scalar::Whole`] and [`Scalar::Real`] by numeric value.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Whole(lhs), Self::Whole(rhs)) => lhs == rhs,
            (Self::Real(lhs), Self::Real(rhs)) => lhs == rhs,
            (Self::Whole(whole), Self::Real(real)) | (Self::Real(real), Self::Whole(whole)) => {
                real == whole
            },
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Whole(lhs), Self::Whole(rhs)) => lhs.partial_cmp(rhs),
            (Self::Real(lhs), Self::Real(rhs)) => lhs.partial_cmp(rhs),
            (Self::Whole(lhs), Self::Real(rhs)) => lhs.partial_cmp(rhs),
            (Self::Real(lhs), Self::Whole(rhs)) => lhs.partial_cmp(rhs),
        }
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Whole(lhs), Self::Whole(rhs)) => Self::Whole(lhs + rhs),
            (lhs, rhs) => Self::Real(lhs.into_float() + rhs.into_float()),
        }
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Whole(lhs), Self::Whole(rhs)) => Self::Whole(lhs - rhs),
            (lhs, rhs) => Self::Real(lhs.into_float() - rhs.into_float()),
        }
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Whole(lhs), Self::Whole(rhs)) => Self::Whole(lhs * rhs),
            (lhs, rhs) => Self::Real(lhs.into_float() * rhs.into_float()),
        }
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Whole(n) => Self::Whole(-n),
            Self::Real(n) => Self::Real(-n),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn whole_arithmetic_stays_exact() {
        assert_eq!(Scalar::from(7) + Scalar::from(5), Scalar::Whole(int(12)));
        assert_eq!(Scalar::from(7) - Scalar::from(9), Scalar::Whole(int(-2)));
        assert!(matches!(Scalar::from(7) * Scalar::from(5), Scalar::Whole(_)));
    }

    #[test]
    fn real_operand_promotes() {
        assert!(matches!(Scalar::from(7) + Scalar::from(0.5), Scalar::Real(_)));
        assert_eq!(Scalar::from(2) * Scalar::from(0.5), Scalar::from(1));
    }

    #[test]
    fn exact_division() {
        let quotient = Scalar::from(12).try_div(Scalar::from(4)).unwrap();
        assert!(matches!(quotient, Scalar::Whole(_)));
        assert_eq!(quotient.clone() * Scalar::from(4), Scalar::from(12));
    }

    #[test]
    fn inexact_division_promotes() {
        let quotient = Scalar::from(7).try_div(Scalar::from(2)).unwrap();
        assert!(matches!(quotient, Scalar::Real(_)));
        assert_float_absolute_eq!(quotient.to_f64(), 3.5, 1e-12);

        let back = quotient * Scalar::from(2);
        assert_float_absolute_eq!(back.to_f64(), 7.0, 1e-12);
    }

    #[test]
    fn whole_division_by_zero() {
        assert_eq!(
            Scalar::from(1).try_div(Scalar::zero()),
            Err(NumericalError::DivisionByZero(DivisionByZero)),
        );
    }

    #[test]
    fn real_division_by_zero() {
        let quotient = Scalar::from(1.0).try_div(Scalar::zero()).unwrap();
        assert!(quotient.to_f64().is_infinite());
    }

    #[test]
    fn power() {
        assert_eq!(Scalar::from(2).pow(Scalar::from(10)), Scalar::Whole(int(1024)));
        assert!(matches!(Scalar::from(2).pow(Scalar::from(10)), Scalar::Whole(_)));
        assert_eq!(Scalar::from(0).pow(Scalar::from(0)), Scalar::one());
        assert_eq!(Scalar::from(2.5).pow(Scalar::zero()), Scalar::one());

        let recip = Scalar::from(2).pow(Scalar::from(-1));
        assert!(matches!(recip, Scalar::Real(_)));
        assert_float_absolute_eq!(recip.to_f64(), 0.5, 1e-12);
    }

    #[test]
    fn square_root() {
        assert!(matches!(Scalar::from(49).sqrt(), Scalar::Whole(n) if n == 7));
        assert!(matches!(Scalar::from(50).sqrt(), Scalar::Real(_)));
        assert_float_absolute_eq!(Scalar::from(2).sqrt().to_f64(), std::f64::consts::SQRT_2, 1e-12);
    }

    #[test]
    fn cross_kind_comparison() {
        assert_eq!(Scalar::from(2), Scalar::from(2.0));
        assert!(Scalar::from(2) < Scalar::from(2.5));
        assert!(Scalar::from(-0.5) < Scalar::from(0));
        assert_eq!(Scalar::from(f64::NAN).partial_cmp(&Scalar::from(1)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::from(-12).to_string(), "-12");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
    }
}

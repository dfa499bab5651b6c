use crate::consts;
use crate::error::kind::Incomparable;
use crate::primitive::complex;
use rug::{Float, Integer};
use std::{cmp::Ordering, fmt, ops::{Add, Mul, Neg, Sub}};
use super::{error::NumericalError, scalar::Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number over the real, imaginary, and complex numbers, built from [`Scalar`]s.
///
/// # Demotion
///
/// A [`Number::Complex`] whose imaginary part is zero is the same number as a [`Number::Real`],
/// and one whose real part is zero is the same number as a [`Number::Imaginary`].
/// [`Number::simplified`] performs this demotion, and every arithmetic operation on [`Number`]s
/// returns a demoted result. Equality is defined with demotion in mind, so `Real(0)`,
/// `Imaginary(0)`, and `Complex(0, 0)` are all equal.
///
/// # Ordering
///
/// There is no total order over the complex plane. [`Number::compare`] orders two real numbers,
/// or two imaginary numbers, and reports an error for every other combination.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// A real number.
    Real(Scalar),

    /// A pure imaginary number, holding the coefficient of `i`.
    Imaginary(Scalar),

    /// A complex number, holding its real and imaginary parts.
    Complex(Scalar, Scalar),
}

impl Number {
    /// The exact zero.
    pub fn zero() -> Self {
        Self::Real(Scalar::zero())
    }

    /// The exact one.
    pub fn one() -> Self {
        Self::Real(Scalar::one())
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::Imaginary(Scalar::one())
    }

    /// Euler's number.
    pub fn e() -> Self {
        Self::Real(Scalar::Real(consts::E.clone()))
    }

    /// The ratio of a circle's circumference to its diameter.
    pub fn pi() -> Self {
        Self::Real(Scalar::Real(consts::PI.clone()))
    }

    /// Creates a complex number from its real and imaginary parts, demoting it if possible.
    pub fn complex(re: impl Into<Scalar>, im: impl Into<Scalar>) -> Self {
        Self::Complex(re.into(), im.into()).simplified()
    }

    /// Demotes the number to the simplest kind that represents the same value.
    pub fn simplified(self) -> Self {
        match self {
            Self::Complex(re, im) if im.is_zero() => Self::Real(re),
            Self::Complex(re, im) if re.is_zero() => Self::Imaginary(im),
            n => n,
        }
    }

    /// Returns the real and imaginary parts of the number.
    pub fn parts(&self) -> (Scalar, Scalar) {
        self.clone().into_parts()
    }

    /// Converts the number into its real and imaginary parts.
    pub fn into_parts(self) -> (Scalar, Scalar) {
        match self {
            Self::Real(re) => (re, Scalar::zero()),
            Self::Imaginary(im) => (Scalar::zero(), im),
            Self::Complex(re, im) => (re, im),
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Real(n) | Self::Imaginary(n) => n.is_zero(),
            Self::Complex(re, im) => re.is_zero() && im.is_zero(),
        }
    }

    /// Returns true if the number is the real number one.
    pub fn is_one(&self) -> bool {
        let (re, im) = self.parts();
        re == Scalar::one() && im.is_zero()
    }

    /// Returns true if the number is a negative literal: a negative real, a negative multiple of
    /// `i`, or a complex number whose parts are both negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Real(n) | Self::Imaginary(n) => n.is_negative(),
            Self::Complex(re, im) => re.is_negative() && im.is_negative(),
        }
    }

    /// If the number is an exact whole real number, returns it.
    pub fn to_whole(&self) -> Option<Integer> {
        match self.clone().simplified() {
            Self::Real(Scalar::Whole(n)) => Some(n),
            _ => None,
        }
    }

    /// If the number is real, returns the closest [`f64`] to it.
    pub fn to_f64(&self) -> Option<f64> {
        match self.clone().simplified() {
            Self::Real(n) => Some(n.to_f64()),
            _ => None,
        }
    }

    fn to_complex(&self) -> rug::Complex {
        let (re, im) = self.parts();
        complex((re.into_float(), im.into_float()))
    }

    fn from_complex(value: rug::Complex) -> Self {
        let (re, im) = value.into_real_imag();
        Self::Complex(Scalar::Real(re), Scalar::Real(im)).simplified()
    }

    /// Divides this number by another.
    pub fn try_div(self, rhs: Self) -> Result<Self, NumericalError> {
        let quotient = match (self, rhs) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a.try_div(b)?),
            (Self::Imaginary(a), Self::Imaginary(b)) => Self::Real(a.try_div(b)?),
            // a / bi = -(a/b) i
            (Self::Real(a), Self::Imaginary(b)) => Self::Imaginary(-a.try_div(b)?),
            (Self::Imaginary(a), Self::Real(b)) => Self::Imaginary(a.try_div(b)?),
            (Self::Complex(re, im), Self::Real(b)) => {
                Self::Complex(re.try_div(b.clone())?, im.try_div(b)?)
            },
            // (re + im i) / bi = im/b - (re/b) i
            (Self::Complex(re, im), Self::Imaginary(b)) => {
                Self::Complex(im.try_div(b.clone())?, -re.try_div(b)?)
            },
            // multiply through by the conjugate of the divisor
            (lhs, Self::Complex(re, im)) => {
                let denominator = re.clone() * re.clone() + im.clone() * im.clone();
                let numerator = lhs * Self::Complex(re, -im);
                return numerator.try_div(Self::Real(denominator));
            },
        };
        Ok(quotient.simplified())
    }

    /// Orders two real numbers, or two imaginary numbers.
    ///
    /// Returns [`NumericalError::Incomparable`] for every other combination, and for comparisons
    /// involving `NaN`.
    pub fn compare(&self, other: &Self) -> Result<Ordering, NumericalError> {
        let incomparable = || NumericalError::Incomparable(Incomparable {
            left: self.to_string(),
            right: other.to_string(),
        });

        match (self.clone().simplified(), other.clone().simplified()) {
            (Self::Real(lhs), Self::Real(rhs))
                | (Self::Imaginary(lhs), Self::Imaginary(rhs)) => {
                lhs.partial_cmp(&rhs).ok_or_else(incomparable)
            },
            _ => Err(incomparable()),
        }
    }

    /// Raises `e` to the power of this number.
    ///
    /// Imaginary exponents follow Euler's formula, and complex exponents are split into the
    /// product of a real and an imaginary exponential.
    pub fn exp(self) -> Self {
        match self {
            Self::Real(re) => Self::Real(re.map_real(Float::exp)),
            Self::Imaginary(im) => {
                let im = im.into_float();
                Self::Complex(Scalar::Real(im.clone().cos()), Scalar::Real(im.sin())).simplified()
            },
            Self::Complex(re, im) => Self::Real(re).exp() * Self::Imaginary(im).exp(),
        }
    }

    /// Applies a real function to this number, if it is real.
    fn real_only(
        self,
        operation: &str,
        f: impl FnOnce(Float) -> Float,
    ) -> Result<Self, NumericalError> {
        match self.simplified() {
            Self::Real(re) => Ok(Self::Real(re.map_real(f))),
            n => Err(NumericalError::not_implemented(operation, n)),
        }
    }

    /// The natural logarithm.
    pub fn ln(self) -> Result<Self, NumericalError> {
        self.real_only("log", Float::ln)
    }

    pub fn sin(self) -> Result<Self, NumericalError> {
        self.real_only("sin", Float::sin)
    }

    pub fn cos(self) -> Result<Self, NumericalError> {
        self.real_only("cos", Float::cos)
    }

    pub fn tan(self) -> Result<Self, NumericalError> {
        self.real_only("tan", Float::tan)
    }

    pub fn asin(self) -> Result<Self, NumericalError> {
        self.real_only("asin", Float::asin)
    }

    pub fn acos(self) -> Result<Self, NumericalError> {
        self.real_only("acos", Float::acos)
    }

    pub fn atan(self) -> Result<Self, NumericalError> {
        self.real_only("atan", Float::atan)
    }

    pub fn sinh(self) -> Result<Self, NumericalError> {
        self.real_only("sinh", Float::sinh)
    }

    pub fn cosh(self) -> Result<Self, NumericalError> {
        self.real_only("cosh", Float::cosh)
    }

    pub fn tanh(self) -> Result<Self, NumericalError> {
        self.real_only("tanh", Float::tanh)
    }

    /// The magnitude of the number, which is always real.
    pub fn abs(self) -> Self {
        match self {
            Self::Real(n) | Self::Imaginary(n) => Self::Real(n.abs()),
            Self::Complex(re, im) => Self::Real((re.clone() * re + im.clone() * im).sqrt()),
        }
    }

    /// The square root of a real number. The square root of a negative real is imaginary.
    pub fn sqrt(self) -> Result<Self, NumericalError> {
        match self.simplified() {
            Self::Real(re) if re.is_negative() => Ok(Self::Imaginary((-re).sqrt())),
            Self::Real(re) => Ok(Self::Real(re.sqrt())),
            n => Err(NumericalError::not_implemented("sqrt", n)),
        }
    }

    /// The argument of the number: the angle it makes with the positive real axis.
    pub fn arg(self) -> Self {
        match self.simplified() {
            Self::Real(re) if re.is_negative() => Self::pi(),
            Self::Real(_) => Self::zero(),
            Self::Imaginary(im) if im.is_negative() => Self::Real(Scalar::Real(-consts::HALF_PI.clone())),
            Self::Imaginary(_) => Self::Real(Scalar::Real(consts::HALF_PI.clone())),
            Self::Complex(re, im) => Self::Real(im.atan2(re)),
        }
    }

    /// Raises this number to the given power.
    ///
    /// Two reals follow the [`Scalar`] power rules. Otherwise, a zero exponent produces one, an
    /// exact whole exponent is computed by repeated multiplication, and anything else uses the
    /// principal branch of `exp(rhs * log(self))`.
    pub fn pow(self, rhs: Self) -> Result<Self, NumericalError> {
        let (base, exp) = match (self.simplified(), rhs.simplified()) {
            (Self::Real(base), Self::Real(exp)) => return Ok(Self::Real(base.pow(exp))),
            pair => pair,
        };

        if exp.is_zero() {
            return Ok(Self::one());
        }
        if let Some(exp) = exp.to_whole().and_then(|n| n.to_i32()) {
            return base.powi(exp);
        }
        if base.is_zero() {
            return Ok(Self::zero());
        }

        Ok(Self::from_complex((exp.to_complex() * base.to_complex().ln()).exp()))
    }

    /// Raises this number to a whole power by repeated squaring.
    fn powi(self, exp: i32) -> Result<Self, NumericalError> {
        let mut result = Self::one();
        let mut base = self;
        let mut remaining = exp.unsigned_abs();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * base.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.clone() * base;
            }
        }

        if exp < 0 {
            Self::one().try_div(result)
        } else {
            Ok(result)
        }
    }
}

macro_rules! impl_from_real {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Self::Real(Scalar::from(n))
                }
            }
        )*
    };
}

impl_from_real!(i32, i64, u32, u64, f64, Integer, Float);

impl From<Scalar> for Number {
    fn from(n: Scalar) -> Self {
        Self::Real(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(re) => write!(f, "{}", re),
            Self::Imaginary(im) => write!(f, "{}i", im),
            Self::Complex(re, im) if im.is_negative() => {
                write!(f, "{} - {}i", re, im.clone().abs())
            },
            Self::Complex(re, im) => write!(f, "{} + {}i", re, im),
        }
    }
}

/// Two numbers are equal if their real parts and imaginary parts are equal, regardless of kind.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.parts() == other.parts()
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = match (self, rhs) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a + b),
            (Self::Imaginary(a), Self::Imaginary(b)) => Self::Imaginary(a + b),
            (Self::Real(re), Self::Imaginary(im)) | (Self::Imaginary(im), Self::Real(re)) => {
                Self::Complex(re, im)
            },
            (Self::Real(a), Self::Complex(re, im)) | (Self::Complex(re, im), Self::Real(a)) => {
                Self::Complex(re + a, im)
            },
            (Self::Imaginary(a), Self::Complex(re, im)) | (Self::Complex(re, im), Self::Imaginary(a)) => {
                Self::Complex(re, im + a)
            },
            (Self::Complex(a, b), Self::Complex(c, d)) => Self::Complex(a + c, b + d),
        };
        sum.simplified()
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let product = match (self, rhs) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a * b),
            // i^2 = -1
            (Self::Imaginary(a), Self::Imaginary(b)) => Self::Real(-(a * b)),
            (Self::Real(a), Self::Imaginary(b)) | (Self::Imaginary(b), Self::Real(a)) => {
                Self::Imaginary(a * b)
            },
            (Self::Real(a), Self::Complex(re, im)) | (Self::Complex(re, im), Self::Real(a)) => {
                Self::Complex(a.clone() * re, a * im)
            },
            // ai * (re + im i) = -a*im + a*re i
            (Self::Imaginary(a), Self::Complex(re, im)) | (Self::Complex(re, im), Self::Imaginary(a)) => {
                Self::Complex(-(a.clone() * im), a * re)
            },
            (Self::Complex(a, b), Self::Complex(c, d)) => Self::Complex(
                a.clone() * c.clone() - b.clone() * d.clone(),
                a * d + b * c,
            ),
        };
        product.simplified()
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Real(re) => Self::Real(-re),
            Self::Imaginary(im) => Self::Imaginary(-im),
            Self::Complex(re, im) => Self::Complex(-re, -im),
        }
    }
}

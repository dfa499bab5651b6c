//! The expression tree that every symbolic operation works on.
//!
//! An [`Expr`] is an immutable tree that owns its children. Trees are built programmatically,
//! either from the variants directly or with the arithmetic operators implemented on [`Expr`]:
//!
//! ```
//! use symalg_core::symbolic::expr::Expr;
//!
//! // 2x + 1
//! let expr = Expr::from(2) * Expr::from("x") + Expr::from(1);
//! assert_eq!(expr.to_string(), "2 * x + 1");
//! ```
//!
//! The operators flatten one level: adding to an [`Expr::Add`] splices the new term into its list
//! of terms rather than nesting another [`Expr::Add`], and likewise for [`Expr::Mul`]. No other
//! normalization is done on construction.
//!
//! # Strict equality
//!
//! The [`PartialEq`] implementation for [`Expr`] implements **strict equality**, a subset of
//! semantic equality that is cheap to compute and never reports false positives. Two expressions
//! are strictly equal if:
//!
//! - They are the same kind of expression (i.e. both [`Expr::Primary`], both [`Expr::Add`], etc.).
//! - If both are [`Expr::Primary`], both expressions must have equal values.
//! - If both are [`Expr::Add`] or [`Expr::Mul`], both expressions must have strictly equal terms /
//! factors, in any order, with the same multiplicities.
//! - Otherwise, their children must be strictly equal, in order.
//!
//! `x + (y + z)` and `(x + y) + z` are semantically equal, but are not strictly equal, since the
//! trees are nested differently.

mod unary;

use crate::numerical::{Number, Scalar};
use crate::consts;
use std::{fmt, ops::{Add, Div, Mul, Neg, Sub}};
use super::predicate::Predicate;

pub use unary::UnaryFn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single leaf of the tree, such as a number, variable, or function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A literal number, such as `2` or `3i`.
    Number(Number),

    /// A variable, such as `x` or `y`.
    Symbol(String),

    /// A named constant, such as `pi`. It is rendered by name, and evaluates to the carried value.
    Constant(String, Number),

    /// A call to a function from the function table, such as `f(x, y)`.
    Call(String, Vec<Expr>),
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{}", num),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Constant(name, _) => write!(f, "{}", name),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

/// A mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A single leaf.
    Primary(Primary),

    /// Multiple terms added together. An empty sum is zero.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together. An empty product is one.
    Mul(Vec<Expr>),

    /// The negation of an expression.
    Neg(Box<Expr>),

    /// The reciprocal of an expression.
    Inv(Box<Expr>),

    /// An expression raised to a power.
    Exp(Box<Expr>, Box<Expr>),

    /// A unary function applied to an expression.
    Unary(UnaryFn, Box<Expr>),

    /// A piecewise expression. The value is that of the first option whose guard holds.
    Branch(Vec<(Predicate, Expr)>),

    /// The sum of `body` for each whole value of `var` from `start` to `end`, inclusive.
    ///
    /// `var` is bound only within `body`, where it shadows any outer variable with the same name.
    Sum {
        var: String,
        start: Box<Expr>,
        end: Box<Expr>,
        body: Box<Expr>,
    },
}

/// The binding strength of an expression when it is rendered, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Branch,
    Add,
    Mul,
    Exp,
    Atom,
}

/// Writes the expression, wrapped in parentheses if it binds more loosely than `min`.
fn fmt_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: Precedence) -> fmt::Result {
    if expr.precedence() < min {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                let Some(first) = iter.next() else {
                    return write!(f, "0");
                };
                fmt_operand(f, first, Precedence::Add)?;
                for term in iter {
                    if let Self::Neg(inner) = term {
                        write!(f, " - ")?;
                        fmt_operand(f, inner, Precedence::Mul)?;
                    } else {
                        write!(f, " + ")?;
                        fmt_operand(f, term, Precedence::Add)?;
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => {
                let mut iter = factors.iter();
                let Some(first) = iter.next() else {
                    return write!(f, "1");
                };
                fmt_operand(f, first, Precedence::Mul)?;
                for factor in iter {
                    if let Self::Inv(inner) = factor {
                        write!(f, " / ")?;
                        fmt_operand(f, inner, Precedence::Exp)?;
                    } else {
                        write!(f, " * ")?;
                        fmt_operand(f, factor, Precedence::Mul)?;
                    }
                }
                Ok(())
            },
            Self::Neg(inner) => {
                write!(f, "-")?;
                fmt_operand(f, inner, Precedence::Atom)
            },
            Self::Inv(inner) => {
                write!(f, "1 / ")?;
                fmt_operand(f, inner, Precedence::Exp)
            },
            Self::Exp(base, exp) => {
                fmt_operand(f, base, Precedence::Atom)?;
                write!(f, "^")?;
                fmt_operand(f, exp, Precedence::Exp)
            },
            Self::Unary(UnaryFn::Abs, arg) => write!(f, "|{}|", arg),
            Self::Unary(func, arg) => write!(f, "{}({})", func, arg),
            Self::Branch(options) => {
                for (i, (guard, option)) in options.iter().enumerate() {
                    if i > 0 {
                        write!(f, " else ")?;
                    }
                    write!(f, "if {} then ", guard)?;
                    fmt_operand(f, option, Precedence::Add)?;
                }
                Ok(())
            },
            Self::Sum { var, start, end, body } => {
                write!(f, "sum({}, {}, {}, {})", var, start, end, body)
            },
        }
    }
}

impl Expr {
    /// Creates a literal number.
    pub fn number(n: impl Into<Number>) -> Self {
        Self::Primary(Primary::Number(n.into()))
    }

    /// Creates a variable.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates a named constant.
    pub fn constant(name: impl Into<String>, value: Number) -> Self {
        Self::Primary(Primary::Constant(name.into(), value))
    }

    /// The constant `pi`.
    pub fn pi() -> Self {
        Self::constant("pi", Number::pi())
    }

    /// The constant `e`.
    pub fn e() -> Self {
        Self::constant("e", Number::e())
    }

    /// The constant `i`.
    pub fn i() -> Self {
        Self::constant("i", Number::i())
    }

    /// Creates a call to the function with the given name.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Primary(Primary::Call(name.into(), args))
    }

    /// Creates a piecewise expression from `(guard, option)` pairs, tried in order.
    pub fn branch(options: Vec<(Predicate, Expr)>) -> Self {
        Self::Branch(options)
    }

    /// Creates the sum of `body` for each whole value of `var` from `start` to `end`.
    pub fn sum(var: impl Into<String>, start: impl Into<Expr>, end: impl Into<Expr>, body: impl Into<Expr>) -> Self {
        Self::Sum {
            var: var.into(),
            start: Box::new(start.into()),
            end: Box::new(end.into()),
            body: Box::new(body.into()),
        }
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exp: impl Into<Expr>) -> Self {
        Self::Exp(Box::new(self), Box::new(exp.into()))
    }

    /// Applies the given unary function to this expression.
    pub fn unary(self, func: UnaryFn) -> Self {
        Self::Unary(func, Box::new(self))
    }

    /// The natural logarithm of this expression.
    pub fn log(self) -> Self {
        self.unary(UnaryFn::Log)
    }

    /// The logarithm of this expression in the given base, `log(self) / log(base)`.
    pub fn log_base(self, base: impl Into<Expr>) -> Self {
        self.log() / base.into().log()
    }

    /// The square root of this expression, `self^0.5`.
    pub fn sqrt(self) -> Self {
        self.pow(Self::number(Scalar::Real(consts::ONE_HALF.clone())))
    }

    pub fn sin(self) -> Self {
        self.unary(UnaryFn::Sin)
    }

    pub fn cos(self) -> Self {
        self.unary(UnaryFn::Cos)
    }

    pub fn tan(self) -> Self {
        self.unary(UnaryFn::Tan)
    }

    pub fn asin(self) -> Self {
        self.unary(UnaryFn::Asin)
    }

    pub fn acos(self) -> Self {
        self.unary(UnaryFn::Acos)
    }

    pub fn atan(self) -> Self {
        self.unary(UnaryFn::Atan)
    }

    pub fn sinh(self) -> Self {
        self.unary(UnaryFn::Sinh)
    }

    pub fn cosh(self) -> Self {
        self.unary(UnaryFn::Cosh)
    }

    pub fn tanh(self) -> Self {
        self.unary(UnaryFn::Tanh)
    }

    pub fn abs(self) -> Self {
        self.unary(UnaryFn::Abs)
    }

    /// If the expression is a literal number, returns a reference to it.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Primary(Primary::Number(num)) => Some(num),
            _ => None,
        }
    }

    /// If the expression is a variable, returns its name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// Returns the precedence of the expression, used to decide where parentheses are needed
    /// when rendering.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Primary(Primary::Number(num)) => match num {
                Number::Real(n) if n.is_negative() => Precedence::Add,
                Number::Real(_) => Precedence::Atom,
                Number::Imaginary(_) => Precedence::Mul,
                Number::Complex(_, _) => Precedence::Add,
            },
            Self::Primary(_) | Self::Unary(_, _) | Self::Sum { .. } => Precedence::Atom,
            Self::Add(_) => Precedence::Add,
            Self::Mul(_) | Self::Neg(_) | Self::Inv(_) => Precedence::Mul,
            Self::Exp(_, _) => Precedence::Exp,
            Self::Branch(_) => Precedence::Branch,
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or a literal 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::from(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::from(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }
}

/// Returns true if both slices hold strictly equal expressions with the same multiplicities, in
/// any order.
fn same_multiset(lhs: &[Expr], rhs: &[Expr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    lhs.iter().all(|lhs| {
        let found = rhs.iter()
            .enumerate()
            .position(|(i, rhs)| !used[i] && lhs == rhs);
        match found {
            Some(i) => {
                used[i] = true;
                true
            },
            None => false,
        }
    })
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                same_multiset(lhs, rhs)
            },
            (Self::Neg(lhs), Self::Neg(rhs)) | (Self::Inv(lhs), Self::Inv(rhs)) => lhs == rhs,
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            (Self::Unary(lhs_func, lhs), Self::Unary(rhs_func, rhs)) => {
                lhs_func == rhs_func && lhs == rhs
            },
            (Self::Branch(lhs), Self::Branch(rhs)) => lhs == rhs,
            (
                Self::Sum { var: lhs_var, start: lhs_start, end: lhs_end, body: lhs_body },
                Self::Sum { var: rhs_var, start: rhs_start, end: rhs_end, body: rhs_body },
            ) => {
                lhs_var == rhs_var
                    && lhs_start == rhs_start
                    && lhs_end == rhs_end
                    && lhs_body == rhs_body
            },
            _ => false,
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Expr {
                fn from(n: $t) -> Self {
                    Self::number(n)
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, f64, Scalar, Number);

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::symbol(name)
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Self::symbol(name)
    }
}

/// Adds two [`Expr`]s together. No simplification is done, except that operands that are already
/// [`Expr::Add`]s have their terms spliced into the result (flattening one level).
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) => {
                terms.push(other);
                Self::Add(terms)
            },
            (other, Self::Add(rhs_terms)) => {
                let mut terms = vec![other];
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done, except that operands that are
/// already [`Expr::Mul`]s have their factors spliced into the result (flattening one level).
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Mul(mut factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (other, Self::Mul(rhs_factors)) => {
                let mut factors = vec![other];
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// `a - b` is `a + -b`.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// `a / b` is `a * 1/b`.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * Self::Inv(Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::from("x")
    }

    fn y() -> Expr {
        Expr::from("y")
    }

    #[test]
    fn add_flattens_one_level() {
        let expr = (x() + y()) + (Expr::from(1) + Expr::from(2));
        assert_eq!(expr, Expr::Add(vec![x(), y(), Expr::from(1), Expr::from(2)]));
    }

    #[test]
    fn mul_flattens_one_level() {
        let expr = Expr::from(2) * (x() * y());
        assert_eq!(expr, Expr::Mul(vec![Expr::from(2), x(), y()]));
    }

    #[test]
    fn nested_operands_are_not_flattened() {
        // only the operands themselves are spliced, not their children
        let expr = Expr::Add(vec![Expr::Add(vec![x(), y()])]) + Expr::from(1);
        assert_eq!(expr, Expr::Add(vec![Expr::Add(vec![x(), y()]), Expr::from(1)]));
    }

    #[test]
    fn sub_and_div() {
        assert_eq!(x() - y(), Expr::Add(vec![x(), Expr::Neg(Box::new(y()))]));
        assert_eq!(x() / y(), Expr::Mul(vec![x(), Expr::Inv(Box::new(y()))]));
    }

    #[test]
    fn strict_equality() {
        let a = Expr::Mul(vec![Expr::from(2), x() + y()]);
        let b = Expr::Mul(vec![y() + x(), Expr::from(2)]);
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_counts_multiplicity() {
        let a = Expr::Mul(vec![x(), x(), y()]);
        let b = Expr::Mul(vec![x(), y(), y()]);
        assert_ne!(a, b);
    }

    #[test]
    fn strict_equality_is_not_semantic() {
        // `2(x + y)` and `2x + 2y` are semantically equal, but not strictly equal
        let a = Expr::Mul(vec![Expr::from(2), x() + y()]);
        let b = Expr::from(2) * x() + Expr::from(2) * y();
        assert_ne!(a, b);
    }

    #[test]
    fn strict_equality_of_numbers_ignores_kind() {
        assert_eq!(Expr::from(2), Expr::number(Number::complex(2, 0)));
        assert_eq!(Expr::from(2), Expr::from(2.0));
    }

    #[test]
    fn fmt_expr() {
        let expr = Expr::from(2) * x().pow(2) - y() / (x() + Expr::from(1));
        assert_eq!(expr.to_string(), "2 * x^2 - y / (x + 1)");
    }

    #[test]
    fn fmt_negation() {
        assert_eq!((-x()).pow(2).to_string(), "(-x)^2");
        assert_eq!((-(x().pow(2))).to_string(), "-(x^2)");
        assert_eq!((-Expr::from(-5)).to_string(), "-(-5)");
        assert_eq!(Expr::from(-5).pow(2).sin().abs().to_string(), "|sin((-5)^2)|");
    }

    #[test]
    fn fmt_power_is_right_associative() {
        assert_eq!(x().pow(y().pow(2)).to_string(), "x^y^2");
        assert_eq!(x().pow(y()).pow(2).to_string(), "(x^y)^2");
    }

    #[test]
    fn fmt_functions_and_constants() {
        let expr = Expr::call("f", vec![x(), Expr::pi()]) + x().sin().abs();
        assert_eq!(expr.to_string(), "f(x, pi) + |sin(x)|");
        assert_eq!(Expr::sum("k", 1, 3, "k").to_string(), "sum(k, 1, 3, k)");
    }

    #[test]
    fn fmt_branch() {
        let expr = Expr::branch(vec![
            (x().less_than(0), -x()),
            (Predicate::True, x()),
        ]);
        assert_eq!(expr.to_string(), "if x < 0 then -x else if true then x");
    }

    #[test]
    fn fmt_empty_operations() {
        assert_eq!(Expr::Add(vec![]).to_string(), "0");
        assert_eq!(Expr::Mul(vec![]).to_string(), "1");
    }

    #[test]
    fn downgrade() {
        assert_eq!(Expr::Add(vec![]).downgrade(), Expr::from(0));
        assert_eq!(Expr::Mul(vec![]).downgrade(), Expr::from(1));
        assert_eq!(Expr::Mul(vec![x()]).downgrade(), x());
    }
}

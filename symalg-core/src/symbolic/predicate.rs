//! Boolean conditions over expressions, used as the guards of [`Expr::Branch`].

use std::{fmt, ops::{BitAnd, BitOr, Not}};
use super::expr::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A boolean condition over the values of expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Predicate {
    True,
    False,

    /// Holds if every predicate holds. An empty conjunction holds.
    All(Vec<Predicate>),

    /// Holds if any predicate holds. An empty disjunction does not hold.
    Any(Vec<Predicate>),

    /// Holds if the predicate does not hold.
    Not(Box<Predicate>),

    Less(Expr, Expr),
    Greater(Expr, Expr),
    LessEq(Expr, Expr),
    GreaterEq(Expr, Expr),

    /// Holds if every expression evaluates to the same number.
    Equals(Vec<Expr>),

    /// Holds if every predicate evaluates to the same boolean, whether that is true or false.
    Same(Vec<Predicate>),
}

impl Predicate {
    /// Creates a predicate that holds if `lhs` and `rhs` are both true, or both false.
    pub fn same(lhs: Predicate, rhs: Predicate) -> Self {
        Self::Same(vec![lhs, rhs])
    }

    /// Returns the binding strength of the predicate when rendered, from loosest (0) to tightest.
    fn precedence(&self) -> u8 {
        match self {
            Self::Same(_) => 0,
            Self::Any(_) => 1,
            Self::All(_) => 2,
            Self::True | Self::False | Self::Not(_) => 4,
            _ => 3,
        }
    }

    /// Writes the predicates separated by `sep`, wrapping any that bind more loosely than `min`.
    fn fmt_joined(
        f: &mut fmt::Formatter<'_>,
        predicates: &[Predicate],
        sep: &str,
        min: u8,
    ) -> fmt::Result {
        for (i, predicate) in predicates.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", sep)?;
            }
            if predicate.precedence() < min {
                write!(f, "({})", predicate)?;
            } else {
                write!(f, "{}", predicate)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::All(all) if all.is_empty() => write!(f, "true"),
            Self::All(all) => Self::fmt_joined(f, all, "&&", 2),
            Self::Any(any) if any.is_empty() => write!(f, "false"),
            Self::Any(any) => Self::fmt_joined(f, any, "||", 1),
            Self::Not(inner) if inner.precedence() < 4 => write!(f, "!({})", inner),
            Self::Not(inner) => write!(f, "!{}", inner),
            Self::Less(lhs, rhs) => write!(f, "{} < {}", lhs, rhs),
            Self::Greater(lhs, rhs) => write!(f, "{} > {}", lhs, rhs),
            Self::LessEq(lhs, rhs) => write!(f, "{} <= {}", lhs, rhs),
            Self::GreaterEq(lhs, rhs) => write!(f, "{} >= {}", lhs, rhs),
            Self::Equals(exprs) => {
                let mut iter = exprs.iter();
                if let Some(expr) = iter.next() {
                    write!(f, "{}", expr)?;
                    for expr in iter {
                        write!(f, " == {}", expr)?;
                    }
                }
                Ok(())
            },
            Self::Same(same) => Self::fmt_joined(f, same, "<->", 1),
        }
    }
}

impl From<bool> for Predicate {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

/// Conjunction, splicing the predicates of an existing [`Predicate::All`] on either side.
impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::All(mut lhs), Self::All(rhs)) => {
                lhs.extend(rhs);
                Self::All(lhs)
            },
            (Self::All(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::All(lhs)
            },
            (lhs, Self::All(rhs)) => {
                let mut all = vec![lhs];
                all.extend(rhs);
                Self::All(all)
            },
            (lhs, rhs) => Self::All(vec![lhs, rhs]),
        }
    }
}

/// Disjunction, splicing the predicates of an existing [`Predicate::Any`] on either side.
impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Any(mut lhs), Self::Any(rhs)) => {
                lhs.extend(rhs);
                Self::Any(lhs)
            },
            (Self::Any(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::Any(lhs)
            },
            (lhs, Self::Any(rhs)) => {
                let mut any = vec![lhs];
                any.extend(rhs);
                Self::Any(any)
            },
            (lhs, rhs) => Self::Any(vec![lhs, rhs]),
        }
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

/// Comparison builders.
impl Expr {
    /// `self < rhs`
    pub fn less_than(self, rhs: impl Into<Expr>) -> Predicate {
        Predicate::Less(self, rhs.into())
    }

    /// `self > rhs`
    pub fn greater_than(self, rhs: impl Into<Expr>) -> Predicate {
        Predicate::Greater(self, rhs.into())
    }

    /// `self <= rhs`
    pub fn less_or_equal(self, rhs: impl Into<Expr>) -> Predicate {
        Predicate::LessEq(self, rhs.into())
    }

    /// `self >= rhs`
    pub fn greater_or_equal(self, rhs: impl Into<Expr>) -> Predicate {
        Predicate::GreaterEq(self, rhs.into())
    }

    /// `self == rhs`
    pub fn equals(self, rhs: impl Into<Expr>) -> Predicate {
        Predicate::Equals(vec![self, rhs.into()])
    }
}

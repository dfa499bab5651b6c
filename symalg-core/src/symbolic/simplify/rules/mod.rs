//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only inspect the node they are given; [`simplify`] is responsible
//! for visiting children first.
//!
//! [`simplify`]: super::simplify

pub mod multiply;
pub mod negate;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// If the expression is a negation, calls the given transformation function with the negated
/// expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_negate(expr: &Expr, f: impl Copy + Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Neg(inner) = expr {
        f(inner)
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function with
/// the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Copy + Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(factors) = expr {
        f(factors)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    negate::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
}

//! Simplification rules for negation.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_negate, step::Step},
    step_collector::StepCollector,
};
use tracing::trace;

/// `--a = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |inner| match inner {
        Expr::Neg(inner) => Some((**inner).clone()),
        _ => None,
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    trace!(step = ?Step::DoubleNegation, %expr, "simplification rule applied");
    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// Negating a negative literal produces the positive literal.
///
/// `-(-5) = 5`
/// `-(-2i) = 2i`
pub fn negate_negative_literal(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |inner| {
        let num = inner.as_number()?;
        if num.is_negative() {
            Some(Expr::from(-num.clone()))
        } else {
            None
        }
    })?;

    trace!(step = ?Step::NegateNegativeLiteral, %expr, "simplification rule applied");
    step_collector.push(Step::NegateNegativeLiteral);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
        .or_else(|| negate_negative_literal(expr, step_collector))
}

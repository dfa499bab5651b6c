//! Simplification rules for multiplication.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};
use tracing::trace;

/// Collapses repeated variable factors into a power.
///
/// `x*x = x^2`
/// `x*2*y*x = 2*y*x^2`
///
/// Every factor that is not a repeated variable keeps its place. The repeated variables are
/// removed and one power per variable is appended, in order of first appearance. The result is
/// always a multiplication, even if only one factor remains.
pub fn combine_repeated_variables(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for name in factors.iter().filter_map(Expr::as_symbol) {
            match counts.iter_mut().find(|(seen, _)| *seen == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name, 1)),
            }
        }
        counts.retain(|(_, count)| *count > 1);

        if counts.is_empty() {
            return None;
        }

        let is_repeated = |factor: &Expr| {
            factor.as_symbol()
                .map_or(false, |name| counts.iter().any(|(seen, _)| *seen == name))
        };
        let mut new_factors = factors.iter()
            .filter(|&factor| !is_repeated(factor))
            .cloned()
            .collect::<Vec<_>>();
        new_factors.extend(counts.iter().map(|(name, count)| Expr::symbol(*name).pow(*count)));

        Some(Expr::Mul(new_factors))
    })?;

    trace!(step = ?Step::CombineRepeatedVariables, %expr, "simplification rule applied");
    step_collector.push(Step::CombineRepeatedVariables);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    combine_repeated_variables(expr, step_collector)
}

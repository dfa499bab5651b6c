//! Simplification of expressions.
//!
//! Simplification is a single depth-first pass: the children of a node are simplified first, then
//! the rules in [`rules`] are tried once on the node itself. The pass is intentionally shallow; it
//! does not iterate to a fixed point, and callers wanting more can simplify again.
//!
//! ```
//! use symalg_core::symbolic::{expr::Expr, simplify::simplify};
//!
//! let expr = Expr::Neg(Box::new(Expr::Neg(Box::new(Expr::from("x")))));
//! assert_eq!(simplify(&expr), Expr::from("x"));
//! ```

pub mod rules;
pub mod step;

use super::{expr::{Expr, Primary}, predicate::Predicate, step_collector::StepCollector};
use step::Step;

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, returning the list of steps taken.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

/// Simplifies the given expression, reporting each step taken to the given collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let expr = simplify_children(expr, step_collector);
    rules::all(&expr, step_collector).unwrap_or(expr)
}

fn simplify_box(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Box<Expr> {
    Box::new(simplify_with(expr, step_collector))
}

/// Returns the expression with every child simplified.
fn simplify_children(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Primary(Primary::Call(name, args)) => Expr::Primary(Primary::Call(
            name.clone(),
            args.iter().map(|arg| simplify_with(arg, step_collector)).collect(),
        )),
        Expr::Primary(_) => expr.clone(),
        Expr::Add(terms) => Expr::Add(
            terms.iter().map(|term| simplify_with(term, step_collector)).collect(),
        ),
        Expr::Mul(factors) => Expr::Mul(
            factors.iter().map(|factor| simplify_with(factor, step_collector)).collect(),
        ),
        Expr::Neg(inner) => Expr::Neg(simplify_box(inner, step_collector)),
        Expr::Inv(inner) => Expr::Inv(simplify_box(inner, step_collector)),
        Expr::Exp(base, exp) => {
            let base = simplify_box(base, step_collector);
            Expr::Exp(base, simplify_box(exp, step_collector))
        },
        Expr::Unary(func, arg) => Expr::Unary(*func, simplify_box(arg, step_collector)),
        Expr::Branch(options) => Expr::Branch(
            options.iter()
                .map(|(guard, option)| (
                    simplify_predicate(guard, step_collector),
                    simplify_with(option, step_collector),
                ))
                .collect(),
        ),
        Expr::Sum { var, start, end, body } => {
            let start = simplify_box(start, step_collector);
            let end = simplify_box(end, step_collector);
            Expr::Sum { var: var.clone(), start, end, body: simplify_box(body, step_collector) }
        },
    }
}

/// Simplifies every expression inside the predicate.
fn simplify_predicate(predicate: &Predicate, step_collector: &mut dyn StepCollector<Step>) -> Predicate {
    match predicate {
        Predicate::True => Predicate::True,
        Predicate::False => Predicate::False,
        Predicate::All(all) => Predicate::All(
            all.iter().map(|p| simplify_predicate(p, step_collector)).collect(),
        ),
        Predicate::Any(any) => Predicate::Any(
            any.iter().map(|p| simplify_predicate(p, step_collector)).collect(),
        ),
        Predicate::Not(inner) => Predicate::Not(Box::new(simplify_predicate(inner, step_collector))),
        Predicate::Less(lhs, rhs) => {
            let lhs = simplify_with(lhs, step_collector);
            Predicate::Less(lhs, simplify_with(rhs, step_collector))
        },
        Predicate::Greater(lhs, rhs) => {
            let lhs = simplify_with(lhs, step_collector);
            Predicate::Greater(lhs, simplify_with(rhs, step_collector))
        },
        Predicate::LessEq(lhs, rhs) => {
            let lhs = simplify_with(lhs, step_collector);
            Predicate::LessEq(lhs, simplify_with(rhs, step_collector))
        },
        Predicate::GreaterEq(lhs, rhs) => {
            let lhs = simplify_with(lhs, step_collector);
            Predicate::GreaterEq(lhs, simplify_with(rhs, step_collector))
        },
        Predicate::Equals(exprs) => Predicate::Equals(
            exprs.iter().map(|expr| simplify_with(expr, step_collector)).collect(),
        ),
        Predicate::Same(same) => Predicate::Same(
            same.iter().map(|p| simplify_predicate(p, step_collector)).collect(),
        ),
    }
}

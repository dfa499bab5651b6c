use crate::error::Error;
use crate::symbolic::{expr::Expr, predicate::Predicate};
use std::cmp::Ordering;
use super::{ctxt::Ctxt, Eval};

/// Evaluates both sides of a comparison and orders them.
fn compare(lhs: &Expr, rhs: &Expr, ctxt: &Ctxt) -> Result<Ordering, Error> {
    let left = lhs.eval(ctxt)?;
    let right = rhs.eval(ctxt)?;
    left.compare(&right)
        .map_err(|err| err.into_error_at(None))
}

/// Returns true if every item of the iterator equals the first one. Stops at the first error.
fn all_same<T: PartialEq>(mut items: impl Iterator<Item = Result<T, Error>>) -> Result<bool, Error> {
    let Some(first) = items.next().transpose()? else {
        return Ok(true);
    };

    for item in items {
        if item? != first {
            return Ok(false);
        }
    }

    Ok(true)
}

impl Eval for Predicate {
    type Output = bool;

    fn eval(&self, ctxt: &Ctxt) -> Result<bool, Error> {
        match self {
            Self::True => Ok(true),
            Self::False => Ok(false),
            Self::All(all) => {
                for predicate in all {
                    if !predicate.eval(ctxt)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            Self::Any(any) => {
                for predicate in any {
                    if predicate.eval(ctxt)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            },
            Self::Not(inner) => Ok(!inner.eval(ctxt)?),
            Self::Less(lhs, rhs) => compare(lhs, rhs, ctxt).map(Ordering::is_lt),
            Self::Greater(lhs, rhs) => compare(lhs, rhs, ctxt).map(Ordering::is_gt),
            Self::LessEq(lhs, rhs) => compare(lhs, rhs, ctxt).map(Ordering::is_le),
            Self::GreaterEq(lhs, rhs) => compare(lhs, rhs, ctxt).map(Ordering::is_ge),
            Self::Equals(exprs) => all_same(exprs.iter().map(|expr| expr.eval(ctxt))),
            Self::Same(predicates) => all_same(predicates.iter().map(|p| p.eval(ctxt))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::kind::{Incomparable, UnboundVariable};
    use super::*;

    fn x() -> Expr {
        Expr::from("x")
    }

    #[test]
    fn comparisons() {
        let ctxt = Ctxt::new().with_var("x", 3);
        assert!(x().less_than(4).eval(&ctxt).unwrap());
        assert!(!x().greater_than(3).eval(&ctxt).unwrap());
        assert!(x().greater_or_equal(3.0).eval(&ctxt).unwrap());
        assert!(!x().less_or_equal(2.5).eval(&ctxt).unwrap());
    }

    #[test]
    fn connectives() {
        let ctxt = Ctxt::new().with_var("x", 3);
        let outside = x().less_than(1) | x().greater_or_equal(5);
        assert!(!outside.eval(&ctxt).unwrap());
        assert!((!outside & x().equals(3)).eval(&ctxt).unwrap());
    }

    #[test]
    fn empty_connectives() {
        assert!(Predicate::All(vec![]).eval_default().unwrap());
        assert!(!Predicate::Any(vec![]).eval_default().unwrap());
        assert!(Predicate::Equals(vec![]).eval_default().unwrap());
        assert!(Predicate::Same(vec![]).eval_default().unwrap());
    }

    #[test]
    fn short_circuit() {
        // `y` is never looked at
        let pred = Predicate::False & Expr::from("y").less_than(0);
        assert!(!pred.eval_default().unwrap());
    }

    #[test]
    fn equals_across_kinds() {
        let pred = Predicate::Equals(vec![Expr::from(2), Expr::from(2.0), Expr::from(4) / Expr::from(2)]);
        assert!(pred.eval_default().unwrap());
    }

    #[test]
    fn same() {
        let pred = Predicate::same(Predicate::False, Expr::from(1).greater_than(2));
        assert!(pred.eval_default().unwrap());
        let pred = Predicate::same(Predicate::True, Predicate::False);
        assert!(!pred.eval_default().unwrap());
    }

    #[test]
    fn compare_real_with_imaginary() {
        let err = Expr::from(1).less_than(Expr::i()).eval_default().unwrap_err();
        assert!(err.is::<Incomparable>());
    }

    #[test]
    fn imaginary_difference_is_comparable() {
        let two_i = Expr::from(2) * Expr::i();
        let pred = (two_i.clone() - two_i).less_than(Expr::from(3) * Expr::i());
        assert!(pred.eval_default().unwrap());
    }

    #[test]
    fn unbound_operand() {
        let err = x().less_than(1).eval_default().unwrap_err();
        assert!(err.is::<UnboundVariable>());
    }
}

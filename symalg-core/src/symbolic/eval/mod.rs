//! Evaluation of expressions and predicates.
//!
//! Evaluation reduces an [`Expr`] to a [`Number`] (and a [`Predicate`] to a [`bool`]) depth-first,
//! looking up variables and functions in a [`Ctxt`]. The first error encountered aborts the whole
//! evaluation; there are no partial results.
//!
//! ```
//! use symalg_core::numerical::Number;
//! use symalg_core::symbolic::{eval::{Ctxt, Eval}, expr::Expr};
//!
//! let expr = Expr::sum("k", 1, "n", "k");
//! let ctxt = Ctxt::new().with_var("n", 4);
//! assert_eq!(expr.eval(&ctxt).unwrap(), Number::from(10));
//! ```

mod branch;
mod call;
pub mod ctxt;
mod evaluatable;
mod predicate;
mod sum;

pub use ctxt::Ctxt;

use crate::error::{kind::UnboundVariable, Error};
use crate::numerical::Number;
use super::expr::{Expr, Primary};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// The type of value produced by evaluation.
    type Output;

    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Self::Output, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<Self::Output, Error> {
        self.eval(&Ctxt::new())
    }
}

impl Eval for Expr {
    type Output = Number;

    fn eval(&self, ctxt: &Ctxt) -> Result<Number, Error> {
        match self {
            Self::Primary(Primary::Number(num)) | Self::Primary(Primary::Constant(_, num)) => {
                Ok(num.clone())
            },
            Self::Primary(Primary::Symbol(name)) => ctxt.get_var(name)
                .cloned()
                .ok_or_else(|| Error::at(self, UnboundVariable { name: name.clone() })),
            Self::Primary(Primary::Call(name, args)) => call::eval_call(self, name, args, ctxt),
            Self::Add(terms) => terms.iter()
                .try_fold(Number::zero(), |acc, term| Ok::<_, Error>(acc + term.eval(ctxt)?)),
            Self::Mul(factors) => factors.iter()
                .try_fold(Number::one(), |acc, factor| Ok::<_, Error>(acc * factor.eval(ctxt)?)),
            Self::Neg(inner) => Ok(-inner.eval(ctxt)?),
            Self::Inv(inner) => Number::one()
                .try_div(inner.eval(ctxt)?)
                .map_err(|err| err.into_error(self)),
            Self::Exp(base, exp) => base.eval(ctxt)?
                .pow(exp.eval(ctxt)?)
                .map_err(|err| err.into_error(self)),
            Self::Unary(func, arg) => func.apply(arg.eval(ctxt)?)
                .map_err(|err| err.into_error(self)),
            Self::Branch(options) => branch::eval_branch(self, options, ctxt),
            Self::Sum { var, start, end, body } => sum::eval_sum(self, var, start, end, body, ctxt),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::error::kind::{DivisionByZero, NotImplemented, UnsatisfiableBranch, WholeBoundRequired};
    use crate::numerical::Scalar;
    use crate::symbolic::predicate::Predicate;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::from("x")
    }

    #[test]
    fn literals_and_constants() {
        assert_eq!(Expr::from(3).eval_default().unwrap(), Number::from(3));
        assert_eq!(Expr::i().eval_default().unwrap(), Number::i());
        assert_float_absolute_eq!(
            Expr::pi().eval_default().unwrap().to_f64().unwrap(),
            std::f64::consts::PI,
            1e-12
        );
    }

    #[test]
    fn empty_add_and_mul() {
        assert_eq!(Expr::Add(vec![]).eval_default().unwrap(), Number::zero());
        assert_eq!(Expr::Mul(vec![]).eval_default().unwrap(), Number::one());
    }

    #[test]
    fn arithmetic_stays_exact() {
        let expr = Expr::from(2) * x() + Expr::from(1);
        let value = expr.eval(&Ctxt::new().with_var("x", 5)).unwrap();
        assert_eq!(value, Number::from(11));
        assert!(matches!(value, Number::Real(Scalar::Whole(_))));
    }

    #[test]
    fn unbound_variable() {
        let err = (x() + Expr::from(1)).eval_default().unwrap_err();
        assert_eq!(err.kind::<UnboundVariable>(), Some(&UnboundVariable { name: "x".to_string() }));
        assert_eq!(err.expr, Some(x()));
    }

    #[test]
    fn division_by_exact_zero() {
        let expr = Expr::from(1) / Expr::from(0);
        let err = expr.eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.expr, Some(Expr::Inv(Box::new(Expr::from(0)))));
    }

    #[test]
    fn log_of_imaginary() {
        let err = Expr::i().log().eval_default().unwrap_err();
        assert!(err.is::<NotImplemented>());
    }

    #[test]
    fn imaginary_squared() {
        assert_eq!(Expr::i().pow(2).eval_default().unwrap(), Number::from(-1));
    }

    #[test]
    fn first_true_guard_wins() {
        let expr = Expr::branch(vec![
            (Predicate::False, Expr::from(1)),
            (Predicate::True, Expr::from(2)),
            (Predicate::True, Expr::from(3)),
        ]);
        assert_eq!(expr.eval_default().unwrap(), Number::from(2));
    }

    #[test]
    fn unsatisfiable_branch() {
        let expr = Expr::branch(vec![(x().less_than(0), -x())]);
        let err = expr.eval(&Ctxt::new().with_var("x", 1)).unwrap_err();
        assert_eq!(err.kind::<UnsatisfiableBranch>(), Some(&UnsatisfiableBranch { options: 1 }));
    }

    #[test]
    fn sum_over_range() {
        assert_eq!(Expr::sum("k", 1, 3, "k").eval_default().unwrap(), Number::from(6));
    }

    #[test]
    fn sum_over_empty_range() {
        assert_eq!(Expr::sum("k", 5, 3, "k").eval_default().unwrap(), Number::zero());
    }

    #[test]
    fn sum_binder_shadows_outer_variable() {
        let expr = Expr::sum("x", 1, x(), x() * x());
        let ctxt = Ctxt::new().with_var("x", 3);
        assert_eq!(expr.eval(&ctxt).unwrap(), Number::from(14));
    }

    #[test]
    fn sum_requires_whole_bounds() {
        let err = Expr::sum("k", 1, 2.5, "k").eval_default().unwrap_err();
        let kind = err.kind::<WholeBoundRequired>().unwrap();
        assert_eq!(kind.bound, "end");
    }

    #[test]
    fn sum_rejects_inexact_whole_bounds() {
        let err = Expr::sum("k", 1, 3.0, "k").eval_default().unwrap_err();
        assert_eq!(err.kind::<WholeBoundRequired>().unwrap().bound, "end");

        let err = Expr::sum("k", 1.0, 3, "k").eval_default().unwrap_err();
        assert_eq!(err.kind::<WholeBoundRequired>().unwrap().bound, "start");
    }
}

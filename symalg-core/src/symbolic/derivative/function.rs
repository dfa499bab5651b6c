//! Symbolic derivatives of the unary functions in [`UnaryFn`].

use crate::error::Error;
use crate::symbolic::expr::{Expr, UnaryFn};
use super::{derivative, negate, MultBuilder};
use tracing::trace;

/// `sqrt(1 - u^2)`
fn unit_circle(u: &Expr) -> Expr {
    (Expr::from(1) - u.clone().pow(2)).sqrt()
}

/// `1 / e`
fn recip(e: Expr) -> Expr {
    Expr::Inv(Box::new(e))
}

/// Computes the derivative of `func(arg)`, applying the chain rule.
pub(super) fn chain_rule(func: UnaryFn, arg: &Expr, with: &str) -> Result<Expr, Error> {
    trace!(rule = "chain", func = func.name(), "applying derivative rule");
    let mut mult_group = MultBuilder::default();
    mult_group.mult(derivative(arg, with)?);

    let u = || arg.clone();
    let negated = match func {
        UnaryFn::Log => {
            mult_group.mult(recip(u()));
            false
        },
        UnaryFn::Sin => {
            mult_group.mult(u().cos());
            false
        },
        UnaryFn::Cos => {
            mult_group.mult(u().sin());
            true
        },
        UnaryFn::Tan => {
            mult_group.mult(recip(u().cos().pow(2)));
            false
        },
        UnaryFn::Asin => {
            mult_group.mult(recip(unit_circle(arg)));
            false
        },
        UnaryFn::Acos => {
            mult_group.mult(recip(unit_circle(arg)));
            true
        },
        UnaryFn::Atan => {
            mult_group.mult(recip(Expr::from(1) + u().pow(2)));
            false
        },
        UnaryFn::Sinh => {
            mult_group.mult(u().cosh());
            false
        },
        UnaryFn::Cosh => {
            mult_group.mult(u().sinh());
            false
        },
        UnaryFn::Tanh => {
            mult_group.mult(recip(u().cosh().pow(2)));
            false
        },
        UnaryFn::Abs => {
            mult_group.mult(u());
            mult_group.mult(recip(u().abs()));
            false
        },
    };

    if negated {
        Ok(negate(mult_group.into()))
    } else {
        Ok(mult_group.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::derivative::tests::eval_x;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn sin_of_variable() {
        assert_eq!(chain_rule(UnaryFn::Sin, &Expr::from("x"), "x").unwrap(), Expr::from("x").cos());
    }

    #[test]
    fn cos_is_negated() {
        let d = chain_rule(UnaryFn::Cos, &(Expr::from(2) * Expr::from("x")), "x").unwrap();
        assert_eq!(d, -(Expr::from(2) * (Expr::from(2) * Expr::from("x")).sin()));
    }

    #[test]
    fn every_function_matches_finite_difference() {
        const DX: f64 = 0.00001;
        const TOL: f64 = 0.0001;
        const POINT: f64 = 0.3;

        let arg = Expr::from(2) * Expr::from("x");
        for func in UnaryFn::ALL {
            let f = Expr::Unary(func, Box::new(arg.clone()));
            let symbolic = eval_x(&chain_rule(func, &arg, "x").unwrap(), POINT);
            let numeric = (eval_x(&f, POINT + DX) - eval_x(&f, POINT)) / DX;
            assert!(
                (symbolic - numeric).abs() < TOL,
                "derivative of `{f}` at x={POINT} was {symbolic}, expected about {numeric}",
            );
        }
    }
}

//! Symbolic differentiation of expressions.

mod function;

use crate::error::Error;
use crate::numerical::{NumericalError, Number};
use super::expr::{Expr, Primary};
use super::scope;
use tracing::trace;

/// Returns `true` if the given [`Expr`] is "clearly" zero. This is intended to clean up the
/// derivative as it is built and is not mathematically rigorous.
fn is_trivially_zero(e: &Expr) -> bool {
    match e {
        Expr::Primary(Primary::Number(n)) => n.is_zero(),
        Expr::Add(sum) => sum.iter().all(is_trivially_zero),
        Expr::Mul(mul) => mul.iter().any(is_trivially_zero),
        Expr::Neg(inner) => is_trivially_zero(inner),
        Expr::Exp(base, exponent) => is_trivially_zero(base) && !is_trivially_zero(exponent),
        _ => false,
    }
}

/// Returns `true` if the given [`Expr`] is "clearly" one. This is intended to clean up the
/// derivative as it is built and is not mathematically rigorous.
fn is_trivially_unity(e: &Expr) -> bool {
    match e {
        Expr::Primary(Primary::Number(n)) => n.is_one(),
        Expr::Mul(exprs) => exprs.iter().all(is_trivially_unity),
        Expr::Exp(base, exponent) => is_trivially_zero(exponent) || is_trivially_unity(base),
        Expr::Add(exprs) => exprs.len() == 1 && is_trivially_unity(&exprs[0]),
        _ => false,
    }
}

/// Helper struct to build a product of expressions while applying basic simplification rules. If
/// any of the expressions are zero, the product is reduced to zero.
#[derive(Default)]
struct MultBuilder(Vec<Expr>);

impl From<MultBuilder> for Expr {
    fn from(value: MultBuilder) -> Self {
        Expr::Mul(value.0).downgrade()
    }
}

impl MultBuilder {
    fn mult(&mut self, e: Expr) {
        if is_trivially_zero(&e) || self.0.first().is_some_and(is_trivially_zero) {
            self.0 = vec![Expr::from(0)];
            return;
        }

        if !is_trivially_unity(&e) {
            self.0.push(e)
        }
    }
}

/// Helper struct to build a summation of expressions while applying basic simplification rules.
/// Only non-zero expressions are added to the sum.
#[derive(Default)]
struct SumBuilder(Vec<Expr>);

impl From<SumBuilder> for Expr {
    fn from(value: SumBuilder) -> Self {
        Expr::Add(value.0).downgrade()
    }
}

impl SumBuilder {
    fn add(&mut self, e: Expr) {
        if !is_trivially_zero(&e) {
            self.0.push(e)
        }
    }
}

/// `-e`, or zero if `e` is clearly zero.
fn negate(e: Expr) -> Expr {
    if is_trivially_zero(&e) {
        Expr::from(0)
    } else {
        Expr::Neg(Box::new(e))
    }
}

/// The error returned for an expression whose derivative is not computed symbolically.
fn unsupported(f: &Expr) -> Error {
    NumericalError::not_implemented("derivative", f).into_error(f)
}

/// `(f + g)' = f' + g'`
fn sum_rule(exprs: &[Expr], with: &str) -> Result<Expr, Error> {
    trace!(rule = "sum", terms = exprs.len(), "applying derivative rule");
    let mut sum = SumBuilder::default();
    for elem in exprs {
        sum.add(derivative(elem, with)?);
    }
    Ok(sum.into())
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(product: &[Expr], with: &str) -> Result<Expr, Error> {
    trace!(rule = "product", factors = product.len(), "applying derivative rule");
    let mut outer_sum = SumBuilder::default();

    for derivative_index in 0..product.len() {
        let mut inner_mult = MultBuilder::default();
        for (term_index, term) in product.iter().enumerate() {
            let term = if derivative_index == term_index {
                derivative(term, with)?
            } else {
                term.clone()
            };

            inner_mult.mult(term);
        }

        outer_sum.add(inner_mult.into());
    }

    Ok(outer_sum.into())
}

/// `(1/f)' = -f' / f^2`
fn reciprocal_rule(inner: &Expr, with: &str) -> Result<Expr, Error> {
    trace!(rule = "reciprocal", "applying derivative rule");
    let mut mult_group = MultBuilder::default();
    mult_group.mult(derivative(inner, with)?);
    mult_group.mult(Expr::Inv(Box::new(inner.clone().pow(2))));
    Ok(negate(mult_group.into()))
}

/// The derivative of `base^exponent`.
///
/// - `(f^c)' = c * f^(c - 1) * f'` if the exponent does not depend on the variable
/// - `(c^g)' = c^g * ln(c) * g'` if the base does not depend on the variable
/// - `(f^g)' = f^g * (g' * ln(f) + g * f' / f)` otherwise
fn power_rule(base: &Expr, exponent: &Expr, with: &str) -> Result<Expr, Error> {
    let power = || Expr::Exp(Box::new(base.clone()), Box::new(exponent.clone()));
    let mut mult_group = MultBuilder::default();

    match (base.contains_variable(with), exponent.contains_variable(with)) {
        (_, false) => {
            trace!(rule = "power", "applying derivative rule");
            let reduced = match exponent.as_number() {
                Some(n) => Expr::from(n.clone() - Number::one()),
                None => exponent.clone() - Expr::from(1),
            };
            mult_group.mult(exponent.clone());
            mult_group.mult(base.clone().pow(reduced));
            mult_group.mult(derivative(base, with)?);
        },
        (false, true) => {
            trace!(rule = "exponential", "applying derivative rule");
            mult_group.mult(power());
            mult_group.mult(base.clone().log());
            mult_group.mult(derivative(exponent, with)?);
        },
        (true, true) => {
            trace!(rule = "general power", "applying derivative rule");
            let mut sum = SumBuilder::default();

            let mut exponent_term = MultBuilder::default();
            exponent_term.mult(derivative(exponent, with)?);
            exponent_term.mult(base.clone().log());
            sum.add(exponent_term.into());

            let mut base_term = MultBuilder::default();
            base_term.mult(exponent.clone());
            base_term.mult(derivative(base, with)?);
            base_term.mult(Expr::Inv(Box::new(base.clone())));
            sum.add(base_term.into());

            mult_group.mult(power());
            mult_group.mult(sum.into());
        },
    }

    Ok(mult_group.into())
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// Returns [`NotImplemented`] for function calls and sums whose bounds depend on `with`, whose
/// derivatives are not computed symbolically.
///
/// [`NotImplemented`]: crate::error::kind::NotImplemented
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    if !f.contains_variable(with) {
        return Ok(Expr::from(0));
    }

    let expr = match f {
        Expr::Primary(Primary::Symbol(_)) => Expr::from(1),
        Expr::Primary(Primary::Number(_) | Primary::Constant(_, _)) => Expr::from(0),
        Expr::Primary(Primary::Call(_, _)) => return Err(unsupported(f)),
        Expr::Add(terms) => sum_rule(terms, with)?,
        Expr::Mul(factors) => product_rule(factors, with)?,
        Expr::Neg(inner) => negate(derivative(inner, with)?),
        Expr::Inv(inner) => reciprocal_rule(inner, with)?,
        Expr::Exp(base, exponent) => power_rule(base, exponent, with)?,
        Expr::Unary(func, arg) => function::chain_rule(*func, arg, with)?,
        Expr::Branch(options) => {
            trace!(rule = "branch", options = options.len(), "applying derivative rule");
            let options = options.iter()
                .map(|(guard, option)| Ok::<_, Error>((guard.clone(), derivative(option, with)?)))
                .collect::<Result<Vec<_>, _>>()?;
            Expr::Branch(options)
        },
        Expr::Sum { var, start, end, body } => {
            if start.contains_variable(with) || end.contains_variable(with) {
                return Err(unsupported(f));
            }

            trace!(rule = "sum expansion", var = %var, "applying derivative rule");
            let body = match scope::visible_body(var, with, body) {
                Some(body) => derivative(body, with)?,
                None => Expr::from(0),
            };
            Expr::Sum { var: var.clone(), start: start.clone(), end: end.clone(), body: Box::new(body) }
        },
    };

    if is_trivially_zero(&expr) {
        Ok(Expr::from(0))
    } else {
        Ok(expr)
    }
}

#[cfg(test)]
pub mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::error::kind::NotImplemented;
    use crate::symbolic::{eval::{Ctxt, Eval}, predicate::Predicate};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Boilerplate helper function for evaluating an expression and substituting in "x".
    pub fn eval_x(e: &Expr, x: f64) -> f64 {
        let ctxt = Ctxt::new().with_var("x", x);
        e.eval(&ctxt)
            .unwrap()
            .to_f64()
            .expect("evaluated value should be real")
    }

    /// Performs finite difference to approximate the derivative of the provided expression.
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(e, x + DX) - eval_x(e, x)) / DX
    }

    fn test_for_function(function: Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let symbolic = derivative(&function, "x")
            .unwrap_or_else(|err| panic!("derivative of `{function}` was unable to be computed symbolically: {err}"));

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&function, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For `{function}` at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    fn x() -> Expr {
        Expr::from("x")
    }

    #[test]
    fn power_rule() {
        test_for_function(x().pow(2) + x() + Expr::from(1), [0., 1., 2., 5., 8.]);
        test_for_function(x().pow(2.5) - Expr::from(3) * x().pow(-2), [0.5, 1., 3.]);
        test_for_function(x().sqrt(), [0.25, 1., 9.]);
    }

    #[test]
    fn product_and_quotient() {
        test_for_function(x() * x().sin() * Expr::e().pow(x()), [-1., 0.5, 2.]);
        test_for_function(x().sin() / x(), [0.5, 1., 3.]);
        test_for_function(Expr::from(1) / (x().pow(2) + Expr::from(1)), [-2., 0., 1.5]);
    }

    #[test]
    fn exponentials() {
        test_for_function(Expr::from(2).pow(x()), [-1., 0., 3.]);
        test_for_function(x().pow(x()), [0.5, 1., 2.]);
        test_for_function(Expr::e().pow(x().pow(2)), [-0.5, 0., 0.75]);
    }

    #[test]
    fn trigonometric() {
        test_for_function(x().pow(2).sin(), [0., 0.5, 1.2]);
        test_for_function(x().cos() - x().tan(), [-0.5, 0.2, 1.]);
        test_for_function(x().asin() + x().acos() * Expr::from(2), [-0.5, 0., 0.3]);
        test_for_function(x().atan(), [-3., 0., 0.7]);
    }

    #[test]
    fn hyperbolic() {
        test_for_function(x().sinh() * x().cosh(), [-1., 0., 1.]);
        test_for_function(x().tanh(), [-1., 0., 2.]);
    }

    #[test]
    fn logarithms_and_abs() {
        test_for_function(x().log(), [0.5, 1., 10.]);
        test_for_function(x().log_base(2), [0.5, 4.]);
        test_for_function((x() - Expr::from(1)).abs(), [-2., 0., 3.]);
    }

    #[test]
    fn branch() {
        let f = Expr::branch(vec![
            (x().less_than(0), -x()),
            (Predicate::True, x().pow(3)),
        ]);
        test_for_function(f, [-2., 1., 2.]);
    }

    #[test]
    fn sum() {
        // d/dx sum(k, 1, 3, k * x^k) = 1 + 4x + 9x^2
        let f = Expr::sum("k", 1, 3, Expr::from("k") * x().pow("k"));
        let df = derivative(&f, "x").unwrap();
        assert_float_absolute_eq!(eval_x(&df, 2.), 45., 1e-9);
    }

    #[test]
    fn sum_binder_named_like_variable() {
        let f = Expr::sum("x", 1, 3, x().pow(2));
        assert_eq!(derivative(&f, "x").unwrap(), Expr::from(0));
    }

    #[test]
    fn unrelated_expressions() {
        assert_eq!(derivative(&(Expr::from("y").sin() * Expr::pi()), "x").unwrap(), Expr::from(0));
        assert_eq!(derivative(&Expr::call("f", vec![Expr::from(1)]), "x").unwrap(), Expr::from(0));
    }

    #[test]
    fn simple_results() {
        assert_eq!(derivative(&x(), "x").unwrap(), Expr::from(1));
        assert_eq!(derivative(&(Expr::from(3) * x()), "x").unwrap(), Expr::from(3));
        assert_eq!(derivative(&-x(), "x").unwrap(), -Expr::from(1));
    }

    #[test]
    fn unsupported_shapes() {
        let call = Expr::call("f", vec![x()]);
        let err = derivative(&(call.clone() + x()), "x").unwrap_err();
        assert!(err.is::<NotImplemented>());
        assert_eq!(err.expr, Some(call));

        let err = derivative(&Expr::sum("k", 1, x(), "k"), "x").unwrap_err();
        assert!(err.is::<NotImplemented>());
    }
}

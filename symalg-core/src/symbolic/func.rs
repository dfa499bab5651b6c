//! Named, parameterized expressions.

use crate::error::{kind::{ArityMismatch, DuplicateParameter}, Error};
use crate::numerical::Number;
use std::fmt;
use super::{derivative, eval::{Ctxt, Eval}, expr::Expr};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A user-defined function: a name, a list of distinct parameter names, and a body.
///
/// ```
/// use symalg_core::numerical::Number;
/// use symalg_core::symbolic::{eval::Ctxt, expr::Expr, func::Function};
///
/// let f = Function::new("f", ["x"], Expr::from(2) * Expr::from("x") + Expr::from(1)).unwrap();
/// assert_eq!(f.to_string(), "f(x) = 2 * x + 1");
/// assert_eq!(f.call(&[Number::from(5)], &Ctxt::new()).unwrap(), Number::from(11));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    name: String,
    params: Vec<String>,
    body: Expr,
}

impl Function {
    /// Creates a new function.
    ///
    /// Returns [`DuplicateParameter`] if a parameter name appears more than once.
    pub fn new(
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
        body: impl Into<Expr>,
    ) -> Result<Self, Error> {
        let name = name.into();
        let mut seen = Vec::new();
        for param in params {
            let param = param.into();
            if seen.contains(&param) {
                return Err(Error::new(None, DuplicateParameter { function: name, name: param }));
            }
            seen.push(param);
        }

        Ok(Self { name, params: seen, body: body.into() })
    }

    /// The name of the function.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter names of the function, in order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The body of the function.
    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// Calls the function with the given arguments.
    ///
    /// The body is evaluated with only the parameters bound; the variables of `ctxt` are not
    /// visible to it. The functions of `ctxt` are, along with this function itself, so the body
    /// may call itself recursively. Nothing bounds the depth of that recursion.
    pub fn call(&self, args: &[Number], ctxt: &Ctxt) -> Result<Number, Error> {
        if args.len() != self.params.len() {
            let call = Expr::call(
                self.name.clone(),
                args.iter().cloned().map(Expr::from).collect(),
            );
            return Err(Error::new(Some(call), ArityMismatch {
                name: self.name.clone(),
                expected: self.params.len(),
                given: args.len(),
            }));
        }

        debug!(name = %self.name, arity = args.len(), "calling function");
        self.body.eval(&ctxt.call_frame(self, args))
    }

    /// Returns the partial derivative of this function with respect to the parameter `param`.
    ///
    /// The derivative is named after this function with a trailing `'`, and takes the same
    /// parameters. If `param` is not a parameter of this function, the derivative is zero.
    pub fn derived(&self, param: &str) -> Result<Function, Error> {
        debug!(name = %self.name, param, "differentiating function");
        let body = if self.params.iter().any(|p| p == param) {
            derivative::derivative(&self.body, param)?
        } else {
            Expr::from(0)
        };
        debug!(name = %self.name, param, derivative = %body, "differentiated function");

        Ok(Self {
            name: format!("{}'", self.name),
            params: self.params.clone(),
            body,
        })
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) = {}", self.name, self.params.join(", "), self.body)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::kind::UnboundVariable;
    use crate::symbolic::predicate::Predicate;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::from("x")
    }

    fn linear() -> Function {
        Function::new(
            "f",
            ["x"],
            Expr::Add(vec![Expr::Mul(vec![Expr::from(2), x()]), Expr::from(1)]),
        ).unwrap()
    }

    #[test]
    fn call() {
        assert_eq!(linear().call(&[Number::from(5)], &Ctxt::new()).unwrap(), Number::from(11));
    }

    #[test]
    fn call_through_expression() {
        let ctxt = Ctxt::new().with_func(linear()).with_var("y", 5);
        let expr = Expr::call("f", vec![Expr::from("y")]);
        assert_eq!(expr.eval(&ctxt).unwrap(), Number::from(11));
    }

    #[test]
    fn arity_mismatch() {
        let err = linear().call(&[Number::from(5), Number::from(6)], &Ctxt::new()).unwrap_err();
        assert_eq!(err.kind::<ArityMismatch>(), Some(&ArityMismatch {
            name: "f".to_string(),
            expected: 1,
            given: 2,
        }));
    }

    #[test]
    fn arity_mismatch_through_expression() {
        let ctxt = Ctxt::new().with_func(linear());
        let expr = Expr::call("f", vec![Expr::from(1), Expr::from(2)]);
        let err = expr.eval(&ctxt).unwrap_err();
        assert_eq!(err.kind::<ArityMismatch>().map(|k| (k.expected, k.given)), Some((1, 2)));
        assert_eq!(err.expr, Some(expr));
    }

    #[test]
    fn unknown_function_suggests() {
        use crate::error::kind::UnknownFunction;

        let ctxt = Ctxt::new().with_func(linear());
        let err = Expr::call("g", vec![Expr::from(1)]).eval(&ctxt).unwrap_err();
        assert_eq!(err.kind::<UnknownFunction>(), Some(&UnknownFunction {
            name: "g".to_string(),
            suggestions: vec!["f".to_string()],
        }));
    }

    #[test]
    fn duplicate_parameter() {
        let err = Function::new("g", ["x", "y", "x"], x()).unwrap_err();
        assert_eq!(err.kind::<DuplicateParameter>(), Some(&DuplicateParameter {
            function: "g".to_string(),
            name: "x".to_string(),
        }));
    }

    #[test]
    fn caller_variables_are_hidden() {
        let g = Function::new("g", ["x"], x() + Expr::from("y")).unwrap();
        let ctxt = Ctxt::new().with_var("y", 1);
        let err = g.call(&[Number::from(1)], &ctxt).unwrap_err();
        assert!(err.is::<UnboundVariable>());
    }

    #[test]
    fn recursion() {
        let n = || Expr::from("n");
        let fact = Function::new("fact", ["n"], Expr::branch(vec![
            (n().less_or_equal(1), Expr::from(1)),
            (Predicate::True, n() * Expr::call("fact", vec![n() - Expr::from(1)])),
        ])).unwrap();
        assert_eq!(fact.call(&[Number::from(5)], &Ctxt::new()).unwrap(), Number::from(120));
    }

    #[test]
    fn derived_name_and_params() {
        let f = Function::new("f", ["x", "y"], x() * Expr::from("y")).unwrap();
        let dfdx = f.derived("x").unwrap();
        assert_eq!(dfdx.name(), "f'");
        assert_eq!(dfdx.params().to_vec(), vec!["x".to_string(), "y".to_string()]);
        let ctxt = Ctxt::new();
        assert_eq!(dfdx.call(&[Number::from(2), Number::from(7)], &ctxt).unwrap(), Number::from(7));
    }

    #[test]
    fn derived_by_absent_parameter_is_zero() {
        let dfdz = linear().derived("z").unwrap();
        assert_eq!(dfdz.body(), &Expr::from(0));
        assert_eq!(dfdz.call(&[Number::from(3)], &Ctxt::new()).unwrap(), Number::zero());
    }

    #[test]
    fn display() {
        let f = Function::new("h", ["a", "b"], Expr::from("a") - Expr::from("b")).unwrap();
        assert_eq!(f.to_string(), "h(a, b) = a - b");
    }
}

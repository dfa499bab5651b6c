//! A symbolic algebra core.
//!
//! Expressions are immutable trees ([`symbolic::Expr`]) over a numeric tower of exact whole
//! numbers, high-precision reals, and imaginary and complex numbers ([`numerical::Number`]). They
//! can be evaluated against variable and function bindings, substituted into, simplified, and
//! differentiated.
//!
//! ```
//! use symalg_core::numerical::Number;
//! use symalg_core::symbolic::{Ctxt, Eval, Expr, Function};
//!
//! let f = Function::new("f", ["x"], Expr::from("x").pow(3)).unwrap();
//! let df = f.derived("x").unwrap();
//! let ctxt = Ctxt::new().with_func(df);
//!
//! let expr = Expr::call("f'", vec![Expr::from(2)]);
//! assert_eq!(expr.eval(&ctxt).unwrap(), Number::from(12));
//! ```

pub mod consts;
pub mod error;
pub mod numerical;
pub mod primitive;
pub mod symbolic;

//! Expression trees and the operations over them.
//!
//! # Expression representation
//!
//! Expressions are trees of [`Expr`] nodes built programmatically, through the constructors on
//! [`Expr`] and the arithmetic operators. The operators flatten one level of nesting, so that
//! `x + (y + z)` built with `+` is a single [`Expr::Add`] node with three terms.
//!
//! ```
//! use symalg_core::symbolic::Expr;
//!
//! let expr = Expr::from("x") + (Expr::from("y") + Expr::from("z"));
//! assert_eq!(expr, Expr::Add(vec!["x".into(), "y".into(), "z".into()]));
//! ```
//!
//! Guards of piecewise expressions are [`Predicate`]s, and user-defined functions are
//! [`Function`]s.
//!
//! # Operations
//!
//! - [`Expr::replacing`] and [`Expr::contains_variable`] substitute and query free variables,
//!   respecting the scope of the variable bound by [`Expr::Sum`] (see [`scope`]).
//! - [`Eval`] evaluates expressions and predicates in a [`Ctxt`]; [`Expr::is_evaluatable`]
//!   checks whether evaluation could succeed without any bindings.
//! - [`simplify()`] applies the rules of [`simplify::rules`] in one depth-first pass.
//! - [`Function::derived`] and [`derivative::derivative`] differentiate symbolically.
//!
//! ```
//! use symalg_core::numerical::Number;
//! use symalg_core::symbolic::{simplify, Ctxt, Eval, Expr};
//!
//! let expr = Expr::Mul(vec!["x".into(), "x".into()]);
//! let simplified = simplify(&expr);
//! assert_eq!(simplified, Expr::Mul(vec![Expr::from("x").pow(2)]));
//!
//! let ctxt = Ctxt::new().with_var("x", 3);
//! assert_eq!(simplified.eval(&ctxt).unwrap(), Number::from(9));
//! ```

pub mod derivative;
pub mod eval;
pub mod expr;
pub mod func;
pub mod predicate;
pub mod scope;
pub mod simplify;
pub mod step_collector;
mod subst;

pub use eval::{Ctxt, Eval};
pub use expr::{Expr, Primary, UnaryFn};
pub use func::Function;
pub use predicate::Predicate;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;

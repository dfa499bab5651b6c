//! Lexical scoping of the one binder in the expression language, [`Expr::Sum`].
//!
//! Every traversal that looks for a variable by name (substitution, the free-variable query,
//! differentiation) must treat the bound variable of a sum the same way: it is visible in the
//! sum's body only, where it shadows any outer variable with the same name. The bounds of the sum
//! are outside its scope.
//!
//! [`Expr::Sum`]: super::expr::Expr::Sum

use super::expr::Expr;

/// Returns true if a binder for `bound` hides the outer variable `name` inside its scope.
pub fn shadows(bound: &str, name: &str) -> bool {
    bound == name
}

/// Returns the body of a binder for `bound` as seen by a traversal looking for `name`, or [`None`]
/// if the binder hides `name` from the body.
pub fn visible_body<'a>(bound: &str, name: &str, body: &'a Expr) -> Option<&'a Expr> {
    if shadows(bound, name) {
        None
    } else {
        Some(body)
    }
}

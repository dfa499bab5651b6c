use crate::error::{kind::UnsatisfiableBranch, Error};
use crate::numerical::Number;
use crate::symbolic::{expr::Expr, predicate::Predicate};
use super::{ctxt::Ctxt, Eval};

/// Evaluates the option of the first guard, in order, that holds. `expr` is the branch node.
pub(super) fn eval_branch(
    expr: &Expr,
    options: &[(Predicate, Expr)],
    ctxt: &Ctxt,
) -> Result<Number, Error> {
    for (guard, option) in options {
        if guard.eval(ctxt)? {
            return option.eval(ctxt);
        }
    }

    Err(Error::at(expr, UnsatisfiableBranch { options: options.len() }))
}

use crate::error::{kind::WholeBoundRequired, Error};
use crate::numerical::Number;
use crate::symbolic::expr::Expr;
use rug::Integer;
use super::{ctxt::Ctxt, Eval};
use tracing::debug;

/// Evaluates a bound of a sum, which must be an exact whole number.
fn eval_bound(expr: &Expr, which: &'static str, bound: &Expr, ctxt: &Ctxt) -> Result<Integer, Error> {
    let value = bound.eval(ctxt)?;
    value.to_whole()
        .ok_or_else(|| Error::at(expr, WholeBoundRequired {
            bound: which,
            found: value.to_string(),
        }))
}

/// Evaluates `body` once for every whole number from `start` to `end` inclusive, with `var` bound
/// to that number, and adds the results. `expr` is the sum node.
pub(super) fn eval_sum(
    expr: &Expr,
    var: &str,
    start: &Expr,
    end: &Expr,
    body: &Expr,
    ctxt: &Ctxt,
) -> Result<Number, Error> {
    let start = eval_bound(expr, "start", start, ctxt)?;
    let end = eval_bound(expr, "end", end, ctxt)?;
    debug!(var, %start, %end, "expanding sum");

    let mut frame = ctxt.clone();
    let mut total = Number::zero();
    let mut k = start;
    while k <= end {
        frame.add_var(var, k.clone());
        total = total + body.eval(&frame)?;
        k += 1;
    }

    Ok(total)
}

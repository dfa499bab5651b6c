use crate::error::{kind::{ArityMismatch, UnknownFunction}, Error};
use crate::numerical::Number;
use crate::symbolic::expr::Expr;
use super::{ctxt::Ctxt, Eval};

/// Evaluates a call to the function `name` with the given arguments. `expr` is the call node.
pub(super) fn eval_call(expr: &Expr, name: &str, args: &[Expr], ctxt: &Ctxt) -> Result<Number, Error> {
    let func = ctxt.get_func(name)
        .ok_or_else(|| {
            let mut suggestions = ctxt.get_similar_funcs(name)
                .into_iter()
                .map(|func| func.name().to_string())
                .collect::<Vec<_>>();
            suggestions.sort();
            Error::at(expr, UnknownFunction { name: name.to_string(), suggestions })
        })?;

    if args.len() != func.params().len() {
        return Err(Error::at(expr, ArityMismatch {
            name: name.to_string(),
            expected: func.params().len(),
            given: args.len(),
        }));
    }

    let values = args.iter()
        .map(|arg| arg.eval(ctxt))
        .collect::<Result<Vec<_>, _>>()?;
    func.call(&values, ctxt)
}

use ariadne::Fmt;
use symalg_attrs::ErrorKind;
use symalg_error::{ErrorKind, EXPR};

/// A variable was evaluated without a value bound to it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not bound to a value", self.name),
    labels = ["this variable"],
    help = format!("bind it in the context before evaluating: {}", format!("ctxt.add_var(\"{}\", ..)", self.name).fg(EXPR)),
)]
pub struct UnboundVariable {
    /// The name of the unbound variable.
    pub name: String,
}

/// A function call named a function that is not in the function table.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function call"],
    help = if self.suggestions.is_empty() {
        "add the function to the context before evaluating".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// None of the guards of a branch evaluated to true.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no guard of this branch is satisfied",
    labels = ["this branch"],
    help = format!("all {} guard(s) evaluated to false; consider adding a final `true` guard", self.options),
)]
pub struct UnsatisfiableBranch {
    /// The number of options in the branch.
    pub options: usize,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments given to the `{}` function", self.name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.expected,
        self.given
    )
)]
pub struct ArityMismatch {
    /// The name of the function that was called.
    pub name: String,

    /// The number of parameters the function declares.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// Two numbers that have no ordering between them were compared.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot order `{}` and `{}`", self.left, self.right),
    labels = ["this comparison"],
    help = "only two real numbers, or two imaginary numbers, can be ordered",
)]
pub struct Incomparable {
    /// The left-hand side of the comparison.
    pub left: String,

    /// The right-hand side of the comparison.
    pub right: String,
}

/// An exact whole number was divided by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide an exact whole number by zero",
    labels = ["this division"],
)]
pub struct DivisionByZero;

/// A bound of a summation did not evaluate to an exact whole number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the {} bound of this sum must be an exact whole number", self.bound),
    labels = ["this sum"],
    help = format!("the bound evaluated to `{}`", self.found),
)]
pub struct WholeBoundRequired {
    /// Which bound was at fault, `start` or `end`.
    pub bound: &'static str,

    /// The value the bound evaluated to.
    pub found: String,
}

/// An operation has no defined result for the given operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not implemented for `{}`", self.operation, self.operand),
    labels = ["this expression"],
)]
pub struct NotImplemented {
    /// The operation that was attempted.
    pub operation: String,

    /// The operand the operation was attempted on.
    pub operand: String,
}

/// A function was defined with the same parameter name more than once.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the parameter `{}` of the `{}` function is declared more than once", self.name, self.function),
    labels = ["this function body"],
    help = "parameter names must be distinct",
)]
pub struct DuplicateParameter {
    /// The name of the function being defined.
    pub function: String,

    /// The repeated parameter name.
    pub name: String,
}

//! Substitution of variables, and queries for free variables.

use super::{expr::{Expr, Primary}, predicate::Predicate, scope};

impl Expr {
    /// Returns a new tree with every free occurrence of the variable `name` replaced by `with`.
    ///
    /// Occurrences bound by an enclosing [`Expr::Sum`] with the same variable name are not free,
    /// and are left untouched.
    pub fn replacing(&self, name: &str, with: &Expr) -> Expr {
        let replace_all = |exprs: &[Expr]| {
            exprs.iter().map(|expr| expr.replacing(name, with)).collect::<Vec<_>>()
        };

        match self {
            Self::Primary(Primary::Symbol(sym)) if sym == name => with.clone(),
            Self::Primary(Primary::Call(func, args)) => {
                Self::Primary(Primary::Call(func.clone(), replace_all(args)))
            },
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => Self::Add(replace_all(terms)),
            Self::Mul(factors) => Self::Mul(replace_all(factors)),
            Self::Neg(inner) => Self::Neg(Box::new(inner.replacing(name, with))),
            Self::Inv(inner) => Self::Inv(Box::new(inner.replacing(name, with))),
            Self::Exp(base, exp) => Self::Exp(
                Box::new(base.replacing(name, with)),
                Box::new(exp.replacing(name, with)),
            ),
            Self::Unary(func, arg) => Self::Unary(*func, Box::new(arg.replacing(name, with))),
            Self::Branch(options) => Self::Branch(
                options.iter()
                    .map(|(guard, option)| (guard.replacing(name, with), option.replacing(name, with)))
                    .collect(),
            ),
            Self::Sum { var, start, end, body } => Self::Sum {
                var: var.clone(),
                start: Box::new(start.replacing(name, with)),
                end: Box::new(end.replacing(name, with)),
                body: Box::new(
                    scope::visible_body(var, name, body)
                        .map_or_else(|| *body.clone(), |body| body.replacing(name, with)),
                ),
            },
        }
    }

    /// Returns true if the variable `name` occurs free anywhere in the tree.
    pub fn contains_variable(&self, name: &str) -> bool {
        let any = |exprs: &[Expr]| exprs.iter().any(|expr| expr.contains_variable(name));

        match self {
            Self::Primary(Primary::Symbol(sym)) => sym == name,
            Self::Primary(Primary::Call(_, args)) => any(args),
            Self::Primary(_) => false,
            Self::Add(exprs) | Self::Mul(exprs) => any(exprs),
            Self::Neg(inner) | Self::Inv(inner) | Self::Unary(_, inner) => {
                inner.contains_variable(name)
            },
            Self::Exp(base, exp) => base.contains_variable(name) || exp.contains_variable(name),
            Self::Branch(options) => options.iter().any(|(guard, option)| {
                guard.contains_variable(name) || option.contains_variable(name)
            }),
            Self::Sum { var, start, end, body } => {
                start.contains_variable(name)
                    || end.contains_variable(name)
                    || scope::visible_body(var, name, body)
                        .is_some_and(|body| body.contains_variable(name))
            },
        }
    }
}

impl Predicate {
    /// Returns a new predicate with every free occurrence of the variable `name` replaced by
    /// `with`.
    pub fn replacing(&self, name: &str, with: &Expr) -> Predicate {
        let replace_all = |predicates: &[Predicate]| {
            predicates.iter().map(|p| p.replacing(name, with)).collect::<Vec<_>>()
        };

        match self {
            Self::True => Self::True,
            Self::False => Self::False,
            Self::All(all) => Self::All(replace_all(all)),
            Self::Any(any) => Self::Any(replace_all(any)),
            Self::Not(inner) => Self::Not(Box::new(inner.replacing(name, with))),
            Self::Less(lhs, rhs) => Self::Less(lhs.replacing(name, with), rhs.replacing(name, with)),
            Self::Greater(lhs, rhs) => Self::Greater(lhs.replacing(name, with), rhs.replacing(name, with)),
            Self::LessEq(lhs, rhs) => Self::LessEq(lhs.replacing(name, with), rhs.replacing(name, with)),
            Self::GreaterEq(lhs, rhs) => Self::GreaterEq(lhs.replacing(name, with), rhs.replacing(name, with)),
            Self::Equals(exprs) => Self::Equals(
                exprs.iter().map(|expr| expr.replacing(name, with)).collect(),
            ),
            Self::Same(same) => Self::Same(replace_all(same)),
        }
    }

    /// Returns true if the variable `name` occurs free anywhere in the predicate.
    pub fn contains_variable(&self, name: &str) -> bool {
        match self {
            Self::True | Self::False => false,
            Self::All(predicates) | Self::Any(predicates) | Self::Same(predicates) => {
                predicates.iter().any(|p| p.contains_variable(name))
            },
            Self::Not(inner) => inner.contains_variable(name),
            Self::Less(lhs, rhs)
                | Self::Greater(lhs, rhs)
                | Self::LessEq(lhs, rhs)
                | Self::GreaterEq(lhs, rhs) => {
                lhs.contains_variable(name) || rhs.contains_variable(name)
            },
            Self::Equals(exprs) => exprs.iter().any(|expr| expr.contains_variable(name)),
        }
    }
}

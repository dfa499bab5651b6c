use crate::symbolic::{expr::{Expr, Primary}, predicate::Predicate};

impl Expr {
    /// Returns true if the expression could be evaluated without binding any variable or
    /// function.
    ///
    /// Variables and function calls are never statically resolvable. The bound variable of a
    /// [`Expr::Sum`] is resolved by the sum itself, and only the options of a [`Expr::Branch`]
    /// are checked, not its guards.
    pub fn is_evaluatable(&self) -> bool {
        match self {
            Self::Primary(Primary::Number(_) | Primary::Constant(_, _)) => true,
            Self::Primary(Primary::Symbol(_) | Primary::Call(_, _)) => false,
            Self::Add(exprs) | Self::Mul(exprs) => exprs.iter().all(Self::is_evaluatable),
            Self::Neg(inner) | Self::Inv(inner) | Self::Unary(_, inner) => inner.is_evaluatable(),
            Self::Exp(base, exp) => base.is_evaluatable() && exp.is_evaluatable(),
            Self::Branch(options) => options.iter().all(|(_, option)| option.is_evaluatable()),
            Self::Sum { var, start, end, body } => {
                start.is_evaluatable()
                    && end.is_evaluatable()
                    && body.replacing(var, &Expr::from(0)).is_evaluatable()
            },
        }
    }
}

impl Predicate {
    /// Returns true if every expression compared by the predicate is evaluatable.
    pub fn is_evaluatable(&self) -> bool {
        match self {
            Self::True | Self::False => true,
            Self::All(predicates) | Self::Any(predicates) | Self::Same(predicates) => {
                predicates.iter().all(Self::is_evaluatable)
            },
            Self::Not(inner) => inner.is_evaluatable(),
            Self::Less(lhs, rhs)
                | Self::Greater(lhs, rhs)
                | Self::LessEq(lhs, rhs)
                | Self::GreaterEq(lhs, rhs) => lhs.is_evaluatable() && rhs.is_evaluatable(),
            Self::Equals(exprs) => exprs.iter().all(Expr::is_evaluatable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_expressions() {
        assert!((Expr::from(1) + Expr::pi() * Expr::from(2).sin()).is_evaluatable());
        assert!(!Expr::from("x").is_evaluatable());
        assert!(!(Expr::from(1) + Expr::from("x")).is_evaluatable());
        assert!(!Expr::call("f", vec![Expr::from(1)]).is_evaluatable());
    }

    #[test]
    fn sum_resolves_its_binder() {
        assert!(Expr::sum("k", 1, 3, "k").is_evaluatable());
        assert!(!Expr::sum("k", 1, "n", "k").is_evaluatable());
        assert!(!Expr::sum("k", 1, 3, Expr::from("k") * Expr::from("x")).is_evaluatable());
    }

    #[test]
    fn branch_ignores_guards() {
        let expr = Expr::branch(vec![(Expr::from("x").less_than(0), Expr::from(1))]);
        assert!(expr.is_evaluatable());
        assert!(!Expr::from("x").less_than(0).is_evaluatable());
    }
}

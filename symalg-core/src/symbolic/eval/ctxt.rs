use crate::numerical::Number;
use crate::symbolic::func::Function;
use levenshtein::levenshtein;
use std::{collections::HashMap, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the variables and functions that
/// can be used within the expression.
///
/// The function table is shared between a context and every context derived from it (for
/// example, the frame a function body is evaluated in), and is only copied when one of them adds
/// a function.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Number>,

    /// The functions in the context.
    funcs: Arc<HashMap<String, Function>>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from a variable-binding map and a function table.
    pub fn from_parts(vars: HashMap<String, Number>, funcs: HashMap<String, Function>) -> Self {
        Self { vars, funcs: Arc::new(funcs) }
    }

    /// Add a variable to the context, replacing any previous binding with the same name.
    pub fn add_var(&mut self, name: &str, value: impl Into<Number>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Returns the context with the given variable added.
    pub fn with_var(mut self, name: &str, value: impl Into<Number>) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<&Number> {
        self.vars.get(name)
    }

    /// Returns every variable in the context.
    pub fn get_vars(&self) -> &HashMap<String, Number> {
        &self.vars
    }

    /// Add a function to the context, replacing any previous function with the same name.
    pub fn add_func(&mut self, func: Function) {
        Arc::make_mut(&mut self.funcs).insert(func.name().to_string(), func);
    }

    /// Returns the context with the given function added.
    pub fn with_func(mut self, func: Function) -> Self {
        self.add_func(func);
        self
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &str) -> Option<&Function> {
        self.funcs.get(name)
    }

    /// Returns all functions in the context with a name similar to the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&Function> {
        self.funcs
            .iter()
            .filter(|(n, _)| levenshtein(n, name) < 2)
            .map(|(_, f)| f)
            .collect()
    }

    /// Creates the context a call to `func` evaluates its body in.
    ///
    /// Only the parameters of the function are bound, to the given arguments. The function table
    /// is this context's table, plus `func` itself if it is not already present, so that the
    /// body can call itself.
    pub(crate) fn call_frame(&self, func: &Function, args: &[Number]) -> Self {
        let vars = func.params()
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();

        let funcs = if self.funcs.contains_key(func.name()) {
            Arc::clone(&self.funcs)
        } else {
            let mut funcs = (*self.funcs).clone();
            funcs.insert(func.name().to_string(), func.clone());
            Arc::new(funcs)
        };

        Self { vars, funcs }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::Expr;
    use super::*;

    fn func(name: &str) -> Function {
        Function::new(name, ["x"], Expr::from("x")).unwrap()
    }

    #[test]
    fn variables() {
        let ctxt = Ctxt::new().with_var("x", 2).with_var("x", 3);
        assert_eq!(ctxt.get_var("x"), Some(&Number::from(3)));
        assert_eq!(ctxt.get_var("y"), None);
        assert_eq!(ctxt.get_vars().len(), 1);
    }

    #[test]
    fn similar_functions() {
        let ctxt = Ctxt::new()
            .with_func(func("foo"))
            .with_func(func("fob"))
            .with_func(func("bar"));
        let mut similar = ctxt.get_similar_funcs("fo")
            .into_iter()
            .map(|f| f.name())
            .collect::<Vec<_>>();
        similar.sort();
        assert_eq!(similar, vec!["fob", "foo"]);
    }

    #[test]
    fn call_frame_binds_only_parameters() {
        let caller = Ctxt::new().with_var("y", 1);
        let f = func("f");
        let frame = caller.call_frame(&f, &[Number::from(4)]);
        assert_eq!(frame.get_var("x"), Some(&Number::from(4)));
        assert_eq!(frame.get_var("y"), None);
        assert_eq!(frame.get_func("f"), Some(&f));
        assert!(caller.get_func("f").is_none());
    }

    #[test]
    fn from_parts() {
        let ctxt = Ctxt::from_parts(
            HashMap::from([("x".to_string(), Number::from(1))]),
            HashMap::from([("f".to_string(), func("f"))]),
        );
        assert_eq!(ctxt.get_var("x"), Some(&Number::from(1)));
        assert!(ctxt.get_func("f").is_some());
    }
}

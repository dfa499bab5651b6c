//! The error type returned by evaluation and differentiation.

pub mod kind;

use ariadne::{Report, Source};
use crate::symbolic::expr::Expr;
use std::{fmt, io, ops::Range};
use symalg_error::ErrorKind;

/// A general error, optionally associated with the expression it originated from.
#[derive(Debug)]
pub struct Error {
    /// The expression this error originated from.
    pub expr: Option<Expr>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given expression and kind.
    pub fn new(expr: Option<Expr>, kind: impl ErrorKind + 'static) -> Self {
        Self { expr, kind: Box::new(kind) }
    }

    /// Creates a new error originating from the given expression.
    pub fn at(expr: &Expr, kind: impl ErrorKind + 'static) -> Self {
        Self::new(Some(expr.clone()), kind)
    }

    /// Returns the kind of this error as the concrete type `K`, if it is one.
    pub fn kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref()
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind::<K>().is_some()
    }

    /// The rendered expression this error originated from, or an empty string if there is none.
    pub fn source_text(&self) -> String {
        self.expr.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Build a report from this error kind, labelling the whole rendered expression.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &[0..self.source_text().len()])
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        self.build_report("expr").eprint(("expr", Source::from(self.source_text())))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expr {
            Some(expr) => write!(f, "{} (in `{}`)", self.kind.message(), expr),
            None => write!(f, "{}", self.kind.message()),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use pretty_assertions::assert_eq;
    use super::*;
    use super::kind::{DivisionByZero, UnboundVariable};

    fn unbound_x() -> Error {
        Error::at(&Expr::from("x"), UnboundVariable { name: "x".to_string() })
    }

    #[test]
    fn display() {
        assert_eq!(unbound_x().to_string(), "`x` is not bound to a value (in `x`)");
        assert_eq!(Error::new(None, DivisionByZero).source_text(), "");
    }

    #[test]
    fn downcast() {
        let err = unbound_x();
        assert!(err.is::<UnboundVariable>());
        assert!(!err.is::<DivisionByZero>());
        assert_eq!(err.kind::<UnboundVariable>().map(|k| k.name.as_str()), Some("x"));
    }

    #[test]
    fn report_mentions_message() {
        let err = unbound_x();
        let mut out = Vec::new();
        err.build_report("expr")
            .write(("expr", Source::from(err.source_text())), &mut out)
            .unwrap();
        let out = String::from_utf8_lossy(&out);
        assert!(out.contains("is not bound to a value"));
    }
}
